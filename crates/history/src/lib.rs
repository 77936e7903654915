//! Prediction History Log
//!
//! Appends one CSV row per completed request, mirroring the
//! prediction log the service keeps on its side. Logging failures are
//! never fatal to the pipeline; callers warn and move on.

use chrono::Local;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// History error types
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Failed to open history log: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write history row: {0}")]
    Csv(#[from] csv::Error),
}

/// One logged request outcome.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub timestamp: String,
    pub request_id: Uuid,
    /// Where the image came from (file name or "capture.jpg")
    pub source: String,
    pub top1_label: String,
    pub top1_prob: f64,
    /// Whether the mock fallback stood in for the service
    pub used_mock: bool,
}

impl HistoryRecord {
    /// Build a record stamped with the current local time.
    pub fn new(source: &str, top1_label: &str, top1_prob: f64, used_mock: bool) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            request_id: Uuid::new_v4(),
            source: source.to_string(),
            top1_label: top1_label.to_string(),
            top1_prob,
            used_mock,
        }
    }
}

/// Append-only CSV log of prediction outcomes.
pub struct PredictionLog {
    path: PathBuf,
}

impl PredictionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row, writing the header iff the file is new.
    pub fn append(&self, record: &HistoryRecord) -> Result<(), HistoryError> {
        let write_header = !self.path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush()?;

        debug!("Logged prediction outcome for {}", record.source);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(label: &str) -> HistoryRecord {
        HistoryRecord {
            timestamp: "2026-08-29 12:00:00".to_string(),
            request_id: Uuid::nil(),
            source: "leaf.jpg".to_string(),
            top1_label: label.to_string(),
            top1_prob: 0.82,
            used_mock: false,
        }
    }

    #[test]
    fn test_header_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let log = PredictionLog::new(dir.path().join("predictions.csv"));

        log.append(&record("Early Blight")).unwrap();
        log.append(&record("Leaf Mold")).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(contents.matches("timestamp").count(), 1);
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_rows_carry_outcome_fields() {
        let dir = tempfile::tempdir().unwrap();
        let log = PredictionLog::new(dir.path().join("predictions.csv"));

        let mut mocked = record("Tomato - Early Blight (mock)");
        mocked.used_mock = true;
        log.append(&mocked).unwrap();

        let contents = std::fs::read_to_string(log.path()).unwrap();
        assert!(contents.contains("Tomato - Early Blight (mock)"));
        assert!(contents.contains("0.82"));
        assert!(contents.contains("true"));
    }

    #[test]
    fn test_new_record_is_timestamped() {
        let record = HistoryRecord::new("leaf.jpg", "Early Blight", 0.9, false);
        // %Y-%m-%d %H:%M:%S
        assert_eq!(record.timestamp.len(), 19);
        assert!(!record.request_id.is_nil());
    }

    #[test]
    fn test_unwritable_path_is_io_error() {
        let log = PredictionLog::new("/nonexistent/dir/predictions.csv");
        assert!(matches!(
            log.append(&record("x")),
            Err(HistoryError::Io(_))
        ));
    }
}
