//! Deterministic mock fallback

use crate::result::{Prediction, PredictionResult};

/// The fixed result shown when the service is unreachable or faulting.
///
/// No randomness: every call returns the same three entries, so tests
/// and users can tell a degraded demo apart from a live answer by the
/// "(mock)" suffix.
pub fn mock_result() -> PredictionResult {
    PredictionResult {
        predictions: vec![
            Prediction {
                index: 0,
                label: Some("Tomato - Early Blight (mock)".to_string()),
                solution: Some(
                    "Remove affected leaves, apply copper fungicide, rotate crops. (mock)"
                        .to_string(),
                ),
                probability: 0.82,
            },
            Prediction {
                index: 1,
                label: Some("Tomato - Leaf Mold (mock)".to_string()),
                solution: Some(
                    "Increase air circulation, avoid overhead watering. (mock)".to_string(),
                ),
                probability: 0.12,
            },
            Prediction {
                index: 2,
                label: Some("Tomato - Septoria Leaf Spot (mock)".to_string()),
                solution: Some("Prune lower leaves, apply fungicide. (mock)".to_string()),
                probability: 0.06,
            },
        ],
        inference_time_s: None,
    }
}
