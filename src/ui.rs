pub mod app;

use crate::app::core;
use crate::app::run_effect::RunEffect;
use crate::classifier::interface::ImageClassifier;
use crate::config::Config;
use crate::logger::interface::Logger;
use eframe::egui;
use std::sync::mpsc::channel;
use std::sync::Arc;

pub fn run(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
) -> Result<(), eframe::Error> {
    let (event_sender, event_receiver) = channel();
    let run_effect = RunEffect::new(logger.clone(), image_classifier, event_sender);

    let (state, effects) = core::init();
    run_effect.spawn_effects(effects);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };

    let app = app::DetectorApp::new(config, logger, state, event_receiver, run_effect);

    eframe::run_native(
        "Plant Disease Detection",
        options,
        Box::new(|_cc| Box::new(app)),
    )
}
