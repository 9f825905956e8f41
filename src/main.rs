use classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use classifier::interface::ImageClassifier;
use config::Config;
use error::DetectError;
use logger::impl_console::LoggerConsole;
use logger::interface::Logger;
use std::sync::Arc;

mod app;
mod classifier;
mod config;
mod error;
mod labels;
mod logger;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> =
        Arc::new(ImageClassifierTractOnnx::new(config.model.clone())?);

    // The label table and the artifact are maintained independently; a
    // width mismatch would mislabel every prediction.
    if image_classifier.num_classes() != labels::LABELS.len() {
        return Err(DetectError::LabelTableMismatch {
            model_classes: image_classifier.num_classes(),
            table_len: labels::LABELS.len(),
        }
        .into());
    }

    let _ = logger.info(&format!(
        "model loaded from {} ({} classes)",
        config.model.onnx_model_path,
        image_classifier.num_classes()
    ));

    ui::run(config, logger, image_classifier)?;

    Ok(())
}
