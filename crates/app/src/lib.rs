//! LeafScan Client Application
//!
//! Wires the capture, catalog, prediction, rendering, and history
//! crates into the submit pipeline: capture an image, POST it to the
//! classification service, and produce the markup that replaces the
//! result area.

use capture::{CaptureSession, ImageBlob};
use catalog::LabelCatalog;
use history::{HistoryRecord, PredictionLog};
use predict::{
    mock_result, HealthStatus, PredictClientConfig, PredictError, PredictionClient,
    RequestGeneration,
};
use render::{render_error, render_result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the prediction service
    pub base_url: String,
    /// URL of the optional label catalog
    pub labels_url: String,
    /// Path of the client-side prediction log
    pub history_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let base_url = "http://127.0.0.1:5000".to_string();
        Self {
            labels_url: format!("{base_url}/static/labels.json"),
            history_path: "predictions.csv".to_string(),
            base_url,
        }
    }
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// The submit pipeline: one active image in, one rendered panel out.
pub struct App {
    client: PredictionClient,
    catalog: LabelCatalog,
    session: CaptureSession,
    generation: RequestGeneration,
    log: PredictionLog,
    labels_url: String,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        info!("Creating app for service at {}", config.base_url);
        Self {
            client: PredictionClient::new(PredictClientConfig {
                base_url: config.base_url,
            }),
            catalog: LabelCatalog::NotLoaded,
            session: CaptureSession::new(),
            generation: RequestGeneration::new(),
            log: PredictionLog::new(&config.history_path),
            labels_url: config.labels_url,
        }
    }

    /// Load the optional label catalog. Best-effort: failure leaves
    /// the catalog NotLoaded and the pipeline working.
    pub async fn load_catalog(&mut self) {
        self.catalog = LabelCatalog::fetch(&self.labels_url).await;
    }

    pub fn catalog(&self) -> &LabelCatalog {
        &self.catalog
    }

    /// Make `blob` the active image for the next submission.
    pub fn select_image(&mut self, blob: ImageBlob) {
        self.session.select(blob);
    }

    /// Probe the service's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, PredictError> {
        self.client.health().await
    }

    /// Run one submission end to end.
    ///
    /// Returns the markup that replaces the result area, or `None`
    /// when a newer submission superseded this one while it was in
    /// flight. Submitting with no active image reports the user error
    /// without sending a request.
    pub async fn submit(&self) -> Option<String> {
        let blob = match self.session.active() {
            Ok(blob) => blob,
            Err(e) => return Some(render_error(&e.to_string())),
        };

        let token = self.generation.begin();
        let outcome = self.client.predict(blob).await;

        if !self.generation.is_current(token) {
            info!("Dropping superseded prediction result");
            return None;
        }

        match outcome {
            Ok(result) => {
                self.log_outcome(blob, &result);
                Some(render_result(&result, &self.catalog))
            }
            Err(e) => Some(render_error(&e.to_string())),
        }
    }

    fn log_outcome(&self, blob: &ImageBlob, result: &predict::PredictionResult) {
        let Some(top1) = result.predictions.first() else {
            return;
        };

        let record = HistoryRecord::new(
            &blob.name,
            &self.catalog.resolve(top1.index, top1.label.as_deref()),
            top1.probability,
            *result == mock_result(),
        );
        if let Err(e) = self.log.append(&record) {
            warn!("History log write failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_local_service() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.labels_url, "http://127.0.0.1:5000/static/labels.json");
        assert_eq!(config.history_path, "predictions.csv");
    }

    #[tokio::test]
    async fn test_submit_without_image_is_user_error() {
        let app = App::new(AppConfig::default());
        let markup = app.submit().await.unwrap();
        assert!(markup.contains("No image selected"));
        assert!(markup.contains(r#"class="error""#));
    }
}
