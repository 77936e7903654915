//! HTTP client for the prediction service

use crate::mock::mock_result;
use crate::{PredictError, PredictionResult};
use capture::ImageBlob;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Form field name the service expects the image under
const IMAGE_FIELD: &str = "image";

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictClientConfig {
    /// Base URL of the prediction service
    pub base_url: String,
}

impl Default for PredictClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Service health report (GET /health)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// Whether the service has its model loaded
    pub tflite_loaded: bool,
    /// Model input shape (height, width), when reported
    #[serde(default)]
    pub input_shape: Option<Vec<u32>>,
}

/// Client for the remote classification service.
pub struct PredictionClient {
    config: PredictClientConfig,
    http: reqwest::Client,
}

impl PredictionClient {
    pub fn new(config: PredictClientConfig) -> Self {
        info!("Creating prediction client for {}", config.base_url);
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &PredictClientConfig {
        &self.config
    }

    /// Submit one image, always yielding something to display.
    ///
    /// Transport failures and HTTP 500 mean the service is down and
    /// degrade to the mock result. Any other non-success status is a
    /// rejection reported with its status and body; a success response
    /// without a usable predictions list is a no-predictions error.
    pub async fn predict(&self, blob: &ImageBlob) -> Result<PredictionResult, PredictError> {
        let part = Part::bytes(blob.data.clone())
            .file_name(blob.name.clone())
            .mime_str(&blob.mime)
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let url = format!("{}/predict", self.config.base_url);
        debug!("Submitting {} bytes to {}", blob.len(), url);

        let response = match self.http.post(&url).multipart(form).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Predict transport failed, using mock result: {}", e);
                return Ok(mock_result());
            }
        };

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            if status == 500 {
                warn!("Service faulted with 500, using mock result");
                return Ok(mock_result());
            }
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Rejected { status, body });
        }

        let body = match response.text().await {
            Ok(t) => t,
            Err(e) => {
                warn!("Failed reading response body, using mock result: {}", e);
                return Ok(mock_result());
            }
        };

        interpret_body(&body)
    }

    /// Probe the service's health endpoint.
    ///
    /// No mock here: the health probe reports reality.
    pub async fn health(&self) -> Result<HealthStatus, PredictError> {
        let url = format!("{}/health", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictError::Rejected { status, body });
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))
    }
}

/// Decide what a success body means.
///
/// The service is trusted only as far as a non-empty `predictions`
/// array; anything else (missing field, non-array, empty, malformed
/// entries) is a no-predictions error, never a mock fallback.
fn interpret_body(body: &str) -> Result<PredictionResult, PredictError> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Err(PredictError::NoPredictions),
    };

    let usable = value
        .get("predictions")
        .and_then(|p| p.as_array())
        .map_or(false, |list| !list.is_empty());
    if !usable {
        return Err(PredictError::NoPredictions);
    }

    serde_json::from_value(value).map_err(|_| PredictError::NoPredictions)
}
