use crate::error::DetectError;

/// Disease class labels, indexed by the model's output class index.
///
/// The order is the training-time class order baked into the model artifact.
/// Startup verifies the model's output dimensionality against this table
/// (see `main`), so a mismatched artifact fails loudly instead of silently
/// mislabeling.
pub const LABELS: [&str; 38] = [
    "Apple___Apple_scab",
    "Apple___Black_rot",
    "Apple___Cedar_apple_rust",
    "Apple___healthy",
    "Blueberry___healthy",
    "Cherry_(including_sour)___Powdery_mildew",
    "Cherry_(including_sour)___healthy",
    "Corn_(maize)___Cercospora_leaf_spot Gray_leaf_spot",
    "Corn_(maize)___Common_rust_",
    "Corn_(maize)___Northern_Leaf_Blight",
    "Corn_(maize)___healthy",
    "Grape___Black_rot",
    "Grape___Esca_(Black_Measles)",
    "Grape___Leaf_blight_(Isariopsis_Leaf_Spot)",
    "Grape___healthy",
    "Orange___Haunglongbing_(Citrus_greening)",
    "Peach___Bacterial_spot",
    "Peach___healthy",
    "Pepper,_bell___Bacterial_spot",
    "Pepper,_bell___healthy",
    "Potato___Early_blight",
    "Potato___Late_blight",
    "Potato___healthy",
    "Raspberry___healthy",
    "Soybean___healthy",
    "Squash___Powdery_mildew",
    "Strawberry___Leaf_scorch",
    "Strawberry___healthy",
    "Tomato___Bacterial_spot",
    "Tomato___Early_blight",
    "Tomato___Late_blight",
    "Tomato___Leaf_Mold",
    "Tomato___Septoria_leaf_spot",
    "Tomato___Spider_mites Two-spotted_spider_mite",
    "Tomato___Target_Spot",
    "Tomato___Tomato_Yellow_Leaf_Curl_Virus",
    "Tomato___Tomato_mosaic_virus",
    "Tomato___healthy",
];

pub fn label_for(index: usize) -> Result<&'static str, DetectError> {
    LABELS
        .get(index)
        .copied()
        .ok_or(DetectError::LabelIndexOutOfRange {
            index,
            len: LABELS.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_index_maps_to_its_table_entry() {
        for (i, expected) in LABELS.iter().enumerate() {
            assert_eq!(label_for(i).unwrap(), *expected);
        }
    }

    #[test]
    fn test_lookup_is_stable_across_calls() {
        assert_eq!(label_for(3).unwrap(), "Apple___healthy");
        assert_eq!(label_for(3).unwrap(), "Apple___healthy");
    }

    #[test]
    fn test_index_past_end_is_rejected() {
        match label_for(38) {
            Err(DetectError::LabelIndexOutOfRange { index: 38, len: 38 }) => (),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_table_covers_all_classes() {
        assert_eq!(LABELS.len(), 38);
    }
}
