use crate::error::DetectError;
use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, DetectError> {
    image::load_from_memory(bytes).map_err(DetectError::ImageDecode)
}

/// Resize to the network's input square and lay the pixels out as an NCHW
/// batch of one. Values stay raw 0..=255; the network was trained on
/// unscaled inputs.
pub fn resize_image_to_tensor(
    image: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<Tensor, DetectError> {
    let resized = image.resize_exact(width, height, imageops::FilterType::Triangle);
    image_to_tensor(&resized)
}

fn image_to_tensor(image: &DynamicImage) -> Result<Tensor, DetectError> {
    let rgb = image.to_rgb8();
    let mut tensor = Tensor::zero::<f32>(&[1, 3, rgb.height() as usize, rgb.width() as usize])
        .map_err(|e| DetectError::Inference(e.into()))?;

    let data = tensor
        .as_slice_mut::<f32>()
        .map_err(|e| DetectError::Inference(e.into()))?;

    for c in 0..3 {
        for y in 0..rgb.height() {
            for x in 0..rgb.width() {
                let pixel = rgb.get_pixel(x, y);
                let index = c * (rgb.height() * rgb.width()) as usize
                    + y as usize * rgb.width() as usize
                    + x as usize;
                data[index] = pixel[c] as f32;
            }
        }
    }

    Ok(tensor)
}
