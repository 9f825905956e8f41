use thiserror::Error;

/// Everything that can go wrong between an uploaded file and a label on
/// screen. Each variant surfaces as its own user-visible message; none of
/// them is fatal to the session.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("failed to load model from {path}")]
    ModelLoad {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("could not decode the uploaded file as an image")]
    ImageDecode(#[source] image::ImageError),

    #[error("inference failed")]
    Inference(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Cannot occur with a model that passed the startup check, but the
    /// table and the artifact are maintained independently.
    #[error("no label for class index {index} (table has {len} entries)")]
    LabelIndexOutOfRange { index: usize, len: usize },

    #[error("model predicts {model_classes} classes but the label table has {table_len}")]
    LabelTableMismatch {
        model_classes: usize,
        table_len: usize,
    },
}
