//! In-memory image blobs and the active-image session

use crate::CaptureError;
use std::path::Path;
use tracing::debug;

/// A captured image: raw bytes plus MIME type.
///
/// Blobs are never mutated after creation; a newer capture replaces
/// the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    /// Encoded image bytes
    pub data: Vec<u8>,
    /// MIME type of `data`
    pub mime: String,
    /// Display name carried into the upload (file name or "capture.jpg")
    pub name: String,
}

impl ImageBlob {
    /// Create a blob from in-memory bytes (drag-and-drop source).
    pub fn from_bytes(data: Vec<u8>, mime: &str, name: &str) -> Self {
        Self {
            data,
            mime: mime.to_string(),
            name: name.to_string(),
        }
    }

    /// Create a blob from a file on disk (file-picker source).
    ///
    /// The MIME type is inferred from the extension; contents are not
    /// validated, matching what a file picker hands over.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let mime = mime_for_extension(path);

        debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(Self {
            data,
            mime: mime.to_string(),
            name,
        })
    }

    /// Size of the encoded image in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Holds the single "active" image: the most recent capture.
///
/// Submitting with nothing selected is a user error, reported as
/// [`CaptureError::NoActiveImage`].
#[derive(Debug, Default)]
pub struct CaptureSession {
    active: Option<ImageBlob>,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `blob` the active image, discarding any previous one.
    pub fn select(&mut self, blob: ImageBlob) {
        debug!("Selected {} ({} bytes)", blob.name, blob.len());
        self.active = Some(blob);
    }

    /// The active image, if one has been captured.
    pub fn active(&self) -> Result<&ImageBlob, CaptureError> {
        self.active.as_ref().ok_or(CaptureError::NoActiveImage)
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Discard the active image.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_inference() {
        assert_eq!(mime_for_extension(Path::new("leaf.JPG")), "image/jpeg");
        assert_eq!(mime_for_extension(Path::new("leaf.png")), "image/png");
        assert_eq!(
            mime_for_extension(Path::new("leaf.tiff")),
            "application/octet-stream"
        );
        assert_eq!(
            mime_for_extension(Path::new("noext")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_from_file_reads_bytes_and_infers_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaf.png");
        std::fs::write(&path, [0x89, 0x50, 0x4E, 0x47]).unwrap();

        let blob = ImageBlob::from_file(&path).unwrap();
        assert_eq!(blob.name, "leaf.png");
        assert_eq!(blob.mime, "image/png");
        assert_eq!(blob.len(), 4);
    }

    #[test]
    fn test_from_file_missing_is_read_error() {
        assert!(matches!(
            ImageBlob::from_file("/nonexistent/leaf.jpg"),
            Err(CaptureError::Read(_))
        ));
    }

    #[test]
    fn test_session_starts_empty() {
        let session = CaptureSession::new();
        assert!(!session.has_active());
        assert!(matches!(
            session.active(),
            Err(CaptureError::NoActiveImage)
        ));
    }

    #[test]
    fn test_newer_capture_replaces_active() {
        let mut session = CaptureSession::new();
        session.select(ImageBlob::from_bytes(vec![1], "image/png", "first.png"));
        session.select(ImageBlob::from_bytes(vec![2], "image/jpeg", "second.jpg"));

        let active = session.active().unwrap();
        assert_eq!(active.name, "second.jpg");
        assert_eq!(active.data, vec![2]);
    }

    #[test]
    fn test_clear_removes_active() {
        let mut session = CaptureSession::new();
        session.select(ImageBlob::from_bytes(vec![1], "image/png", "a.png"));
        session.clear();
        assert!(!session.has_active());
    }
}
