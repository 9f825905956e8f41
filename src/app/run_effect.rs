use crate::app::core::{Effect, Event};
use crate::classifier::interface::ImageClassifier;
use crate::error::DetectError;
use crate::labels;
use crate::logger::interface::Logger;
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    event_sender: Sender<Event>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("effect"),
            image_classifier,
            event_sender,
        }
    }

    pub fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self.logger.info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::Analyze { image } => {
                let result = self.analyze(&image.bytes);
                let _ = self.event_sender.send(Event::AnalyzeDone(result));
            }
        }
    }

    fn analyze(&self, bytes: &[u8]) -> Result<String, DetectError> {
        let index = self.image_classifier.predict(bytes)?;
        let label = labels::label_for(index)?;
        Ok(label.to_string())
    }
}
