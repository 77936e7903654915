//! Camera toggle state machine and JPEG snapshots

use crate::{CaptureConfig, CaptureError, ImageBlob};
use image::codecs::jpeg::JpegEncoder;
use tracing::{debug, info};

/// Raw RGB frame grabbed from a camera source
#[derive(Debug, Clone)]
pub struct RawFrame {
    /// RGB pixel data (width * height * 3)
    pub data: Vec<u8>,
    /// Frame width
    pub width: u32,
    /// Frame height
    pub height: u32,
}

/// A live camera source producing RGB frames.
///
/// Implementations wrap whatever device backend is available; tests
/// use a deterministic in-memory source.
pub trait FrameSource {
    /// Grab the current frame.
    fn grab(&mut self) -> Result<RawFrame, CaptureError>;

    /// Release the underlying device.
    ///
    /// Failing to release leaks the device rather than crashing, so
    /// implementations swallow errors here.
    fn release(&mut self);
}

/// Camera state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraState {
    Idle,
    Streaming,
}

/// Single-toggle camera: Idle -> Streaming -> Idle.
///
/// At most one source is open at a time; toggling while streaming
/// fully releases the prior source before returning to Idle.
pub struct Camera<S: FrameSource> {
    config: CaptureConfig,
    source: Option<S>,
}

impl<S: FrameSource> Camera<S> {
    pub fn new(config: CaptureConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    pub fn state(&self) -> CameraState {
        if self.source.is_some() {
            CameraState::Streaming
        } else {
            CameraState::Idle
        }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    /// Drive the toggle control.
    ///
    /// Idle: acquire a source via `open` and start streaming; an
    /// acquisition failure is a capability error and the camera stays
    /// Idle. Streaming: release the source and return to Idle.
    pub fn toggle<F>(&mut self, open: F) -> Result<CameraState, CaptureError>
    where
        F: FnOnce(&CaptureConfig) -> Result<S, CaptureError>,
    {
        if let Some(mut source) = self.source.take() {
            source.release();
            info!("Camera stopped");
            return Ok(CameraState::Idle);
        }

        let source = open(&self.config)?;
        self.source = Some(source);
        info!("Camera streaming (facing {:?})", self.config.facing);
        Ok(CameraState::Streaming)
    }

    /// Render the current frame into a JPEG blob at the configured
    /// quality and native frame resolution.
    pub fn snapshot(&mut self) -> Result<ImageBlob, CaptureError> {
        let source = self.source.as_mut().ok_or(CaptureError::NotStreaming)?;
        let frame = source.grab()?;
        let blob = encode_jpeg(frame, self.config.jpeg_quality)?;
        debug!("Captured camera snapshot ({} bytes)", blob.len());
        Ok(blob)
    }

    /// Stop streaming, releasing the source. Safe to call when Idle.
    pub fn stop(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.release();
            info!("Camera stopped");
        }
    }
}

fn encode_jpeg(frame: RawFrame, quality: u8) -> Result<ImageBlob, CaptureError> {
    if frame.data.len() != (frame.width * frame.height * 3) as usize {
        return Err(CaptureError::Encode(
            "frame buffer does not match dimensions".to_string(),
        ));
    }

    let mut encoded = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut encoded, quality);
    encoder
        .encode(
            &frame.data,
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| CaptureError::Encode(e.to_string()))?;

    Ok(ImageBlob::from_bytes(encoded, "image/jpeg", "capture.jpg"))
}
