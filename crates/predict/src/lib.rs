//! Prediction Client
//!
//! Submits a captured image to the remote classification service and
//! interprets the response. The fallback policy is asymmetric on
//! purpose: a dead service (transport failure or HTTP 500) degrades
//! silently to a deterministic mock result, while a service that
//! rejects the request is reported honestly.

mod client;
mod guard;
mod mock;
mod result;

pub use client::{HealthStatus, PredictClientConfig, PredictionClient};
pub use guard::RequestGeneration;
pub use mock::mock_result;
pub use result::{Prediction, PredictionResult};

use thiserror::Error;

/// Prediction error types
#[derive(Error, Debug)]
pub enum PredictError {
    /// The service answered with a non-success status other than 500
    #[error("Server returned {status} {body}")]
    Rejected { status: u16, body: String },

    /// Success response without a usable predictions list
    #[error("No predictions received from server")]
    NoPredictions,

    /// Transport failure on a path without a mock fallback
    #[error("Request failed: {0}")]
    Transport(String),
}
