//! Image Capture Pipeline
//!
//! Normalizes the three capture sources (file selection, dropped
//! bytes, camera snapshot) into a single in-memory [`ImageBlob`],
//! and tracks the one "active" image eligible for submission.

pub mod blob;
pub mod camera;

pub use blob::{CaptureSession, ImageBlob};
pub use camera::{Camera, CameraState, FrameSource, RawFrame};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capture error types
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to read image file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Camera error: {0}")]
    Camera(String),

    #[error("Snapshot encoding failed: {0}")]
    Encode(String),

    #[error("No image selected")]
    NoActiveImage,

    #[error("Camera is not streaming")]
    NotStreaming,
}

/// Preferred camera facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraFacing {
    /// Rear-facing camera
    Environment,
    /// Front-facing camera
    User,
}

/// Capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Preferred camera facing; a device without one falls back to
    /// whatever is available
    pub facing: CameraFacing,
    /// JPEG quality for camera snapshots (1-100)
    pub jpeg_quality: u8,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            facing: CameraFacing::Environment,
            jpeg_quality: 90,
        }
    }
}
