#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: String,
    /// (height, width) the network expects.
    pub input_shape: (u32, u32),
}
