pub mod fixture;
pub mod predict_test;
