use crate::classifier::impl_fake::ImageClassifierFake;
use crate::classifier::interface::ImageClassifier;
use std::io::Cursor;
use std::sync::Arc;

pub struct Fixture {
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
}

impl Fixture {
    pub fn returning(index: usize) -> Self {
        Self {
            image_classifier: Arc::new(ImageClassifierFake::returning(index)),
        }
    }

    pub fn random() -> Self {
        Self {
            image_classifier: Arc::new(ImageClassifierFake::new()),
        }
    }
}

/// An in-memory PNG of a solid green square, standing in for a leaf photo.
pub fn leaf_png_bytes() -> Vec<u8> {
    let mut img = image::ImageBuffer::new(32, 32);
    for pixel in img.pixels_mut() {
        *pixel = image::Rgb([34u8, 139, 34]);
    }

    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}
