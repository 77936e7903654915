//! Prediction wire types

use serde::{Deserialize, Serialize};

/// One classification candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Class index assigned by the model
    pub index: u32,
    /// Display label, if the server provided one
    #[serde(default)]
    pub label: Option<String>,
    /// Remediation text, if the server provided one
    #[serde(default)]
    pub solution: Option<String>,
    /// Confidence in [0, 1]; absent values read as 0
    #[serde(default)]
    pub probability: f64,
}

/// The ordered predictions returned for one submitted image.
///
/// The list arrives pre-ranked by the server (descending probability);
/// nothing downstream re-sorts it. Truncation to the displayed top-N
/// happens at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predictions: Vec<Prediction>,
    /// Server-side inference latency, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_time_s: Option<f64>,
}

impl PredictionResult {
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// The first `n` entries in server order.
    pub fn top(&self, n: usize) -> &[Prediction] {
        &self.predictions[..self.predictions.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_prediction() {
        let p: Prediction = serde_json::from_str(r#"{"index": 4}"#).unwrap();
        assert_eq!(p.index, 4);
        assert_eq!(p.label, None);
        assert_eq!(p.solution, None);
        assert_eq!(p.probability, 0.0);
    }

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "predictions": [
                {"index": 0, "label": "Early Blight", "solution": "Rotate crops", "probability": 0.9},
                {"index": 3, "probability": 0.1}
            ],
            "inference_time_s": 0.042
        }"#;
        let result: PredictionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.predictions[0].label.as_deref(), Some("Early Blight"));
        assert_eq!(result.inference_time_s, Some(0.042));
    }

    #[test]
    fn test_top_never_exceeds_len() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"predictions": [{"index": 0}, {"index": 1}]}"#).unwrap();
        assert_eq!(result.top(3).len(), 2);
        assert_eq!(result.top(1).len(), 1);
        assert_eq!(result.top(1)[0].index, 0);
    }
}
