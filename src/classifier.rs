pub mod image;
pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod model_config;

#[cfg(test)]
pub mod test;
