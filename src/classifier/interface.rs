use crate::error::DetectError;

pub trait ImageClassifier {
    /// Decode raw image bytes, run a forward pass, and return the index of
    /// the highest-scoring output class. No confidence threshold: any
    /// decodable image yields an index.
    fn predict(&self, image: &[u8]) -> Result<usize, DetectError>;

    /// Output dimensionality of the model, checked against the label table
    /// at startup.
    fn num_classes(&self) -> usize;
}
