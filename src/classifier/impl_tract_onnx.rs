use crate::classifier::image::{decode_image, resize_image_to_tensor};
use crate::classifier::interface::ImageClassifier;
use crate::classifier::model_config::ModelConfig;
use crate::error::DetectError;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    num_classes: usize,
}

impl ImageClassifierTractOnnx {
    /// Loads and optimizes the ONNX artifact once. The runnable plan is held
    /// for the process lifetime, so predictions never touch the disk again.
    pub fn new(config: ModelConfig) -> Result<Self, DetectError> {
        let (height, width) = config.input_shape;

        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(
                        f32::datum_type(),
                        tvec!(1, 3, height as usize, width as usize),
                    ),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| DetectError::ModelLoad {
                path: config.onnx_model_path.clone(),
                source: e.into(),
            })?;

        let num_classes = model
            .model()
            .output_fact(0)
            .ok()
            .and_then(|fact| fact.shape.as_concrete())
            .and_then(|dims| dims.last().copied())
            .ok_or_else(|| DetectError::ModelLoad {
                path: config.onnx_model_path.clone(),
                source: "model output shape is not concrete".into(),
            })?;

        Ok(Self {
            model,
            config,
            num_classes,
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn predict(&self, image: &[u8]) -> Result<usize, DetectError> {
        let decoded = decode_image(image)?;

        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(&decoded, width, height)?;

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| DetectError::Inference(e.into()))?;

        let scores = outputs[0]
            .to_array_view::<f32>()
            .map_err(|e| DetectError::Inference(e.into()))?;

        let mut best_index = 0;
        let mut best_score = f32::NEG_INFINITY;
        for (index, &score) in scores.iter().enumerate() {
            if score > best_score {
                best_index = index;
                best_score = score;
            }
        }

        Ok(best_index)
    }

    fn num_classes(&self) -> usize {
        self.num_classes
    }
}
