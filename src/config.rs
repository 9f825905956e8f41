use crate::classifier::model_config::ModelConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub home_image_path: String,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                onnx_model_path: "trained_plant_disease_model.onnx".to_string(),
                input_shape: (128, 128),
            },
            home_image_path: "Diseases.png".to_string(),
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
