use crate::classifier::test::fixture::{leaf_png_bytes, Fixture};
use crate::error::DetectError;
use crate::labels::LABELS;

#[test]
fn test_predict_is_deterministic_for_a_fixed_classifier() {
    let f = Fixture::returning(3);
    let image = leaf_png_bytes();

    let first = f.image_classifier.predict(&image).unwrap();
    let second = f.image_classifier.predict(&image).unwrap();

    assert_eq!(first, 3);
    assert_eq!(first, second);
}

#[test]
fn test_predict_rejects_undecodable_bytes() {
    let f = Fixture::returning(3);

    let result = f.image_classifier.predict(b"definitely not a raster image");

    assert!(matches!(result, Err(DetectError::ImageDecode(_))));
}

#[test]
fn test_random_prediction_stays_in_class_range() {
    let f = Fixture::random();
    let image = leaf_png_bytes();

    for _ in 0..20 {
        let index = f.image_classifier.predict(&image).unwrap();
        assert!(index < LABELS.len());
    }
}

#[test]
fn test_output_dimensionality_matches_label_table() {
    let f = Fixture::random();

    assert_eq!(f.image_classifier.num_classes(), LABELS.len());
}
