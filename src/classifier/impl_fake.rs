use crate::classifier::image::decode_image;
use crate::classifier::interface::ImageClassifier;
use crate::error::DetectError;
use crate::labels::LABELS;
use rand::distr::{Distribution, Uniform};

pub struct ImageClassifierFake {
    fixed_index: Option<usize>,
}

impl ImageClassifierFake {
    pub fn new() -> Self {
        Self { fixed_index: None }
    }

    /// Always answers with the given class index.
    pub fn returning(index: usize) -> Self {
        Self {
            fixed_index: Some(index),
        }
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn predict(&self, image: &[u8]) -> Result<usize, DetectError> {
        // Decode anyway so undecodable uploads fail like the real thing.
        decode_image(image)?;

        match self.fixed_index {
            Some(index) => Ok(index),
            None => {
                let mut rng = rand::rng();

                let index_dist = Uniform::new(0, LABELS.len())
                    .map_err(|e| DetectError::Inference(e.into()))?;

                Ok(index_dist.sample(&mut rng))
            }
        }
    }

    fn num_classes(&self) -> usize {
        LABELS.len()
    }
}
