//! Label Catalog
//!
//! Optional mapping from stringified class index to display label,
//! loaded once at startup. Loading is best-effort: any failure leaves
//! the catalog in the explicit `NotLoaded` state and the pipeline
//! keeps working with inline or synthesized labels.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read label file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid label map: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Index-to-label map with an explicit not-loaded state.
///
/// Read-only after load; passed into the renderer rather than held as
/// a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelCatalog {
    /// Catalog was never loaded (fetch skipped or failed)
    NotLoaded,
    /// Catalog loaded from labels.json
    Loaded(HashMap<String, String>),
}

impl LabelCatalog {
    pub fn from_map(map: HashMap<String, String>) -> Self {
        LabelCatalog::Loaded(map)
    }

    /// Parse a labels.json document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(LabelCatalog::Loaded(map))
    }

    /// Load from a local file, best-effort.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(j) => j,
            Err(e) => {
                warn!("Label catalog not loaded from {}: {}", path.display(), e);
                return LabelCatalog::NotLoaded;
            }
        };

        match Self::from_json_str(&json) {
            Ok(catalog) => {
                info!("Label catalog loaded from {}", path.display());
                catalog
            }
            Err(e) => {
                warn!("Label catalog not loaded from {}: {}", path.display(), e);
                LabelCatalog::NotLoaded
            }
        }
    }

    /// Fetch from the service's static labels endpoint, best-effort.
    pub async fn fetch(url: &str) -> Self {
        let response = match reqwest::get(url).await {
            Ok(r) => r,
            Err(e) => {
                warn!("Label catalog not loaded from {}: {}", url, e);
                return LabelCatalog::NotLoaded;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Label catalog not loaded from {}: status {}",
                url,
                response.status()
            );
            return LabelCatalog::NotLoaded;
        }

        match response.json::<HashMap<String, String>>().await {
            Ok(map) => {
                info!("Label catalog loaded ({} entries)", map.len());
                LabelCatalog::Loaded(map)
            }
            Err(e) => {
                warn!("Label catalog not loaded from {}: {}", url, e);
                LabelCatalog::NotLoaded
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LabelCatalog::Loaded(_))
    }

    /// Resolve the display label for one prediction row.
    ///
    /// Precedence: catalog entry for the stringified index, then the
    /// server's inline label, then a synthesized "Class {index}".
    pub fn resolve(&self, index: u32, inline: Option<&str>) -> String {
        if let LabelCatalog::Loaded(map) = self {
            if let Some(label) = map.get(&index.to_string()) {
                return label.clone();
            }
        }

        match inline {
            Some(label) => label.to_string(),
            None => format!("Class {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_catalog_entry_wins_over_inline_label() {
        let catalog = LabelCatalog::from_json_str(r#"{"0": "Leaf Blight"}"#).unwrap();
        assert_eq!(catalog.resolve(0, Some("X")), "Leaf Blight");
    }

    #[test]
    fn test_inline_label_used_when_index_missing() {
        let catalog = LabelCatalog::from_json_str(r#"{"0": "Leaf Blight"}"#).unwrap();
        assert_eq!(catalog.resolve(3, Some("Rust Fungus")), "Rust Fungus");
    }

    #[test]
    fn test_synthesized_label_when_nothing_known() {
        let catalog = LabelCatalog::from_json_str("{}").unwrap();
        assert_eq!(catalog.resolve(7, None), "Class 7");
        assert_eq!(LabelCatalog::NotLoaded.resolve(7, None), "Class 7");
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            LabelCatalog::from_json_str("not json"),
            Err(CatalogError::Parse(_))
        ));
        // Wrong shape (array instead of object) also fails
        assert!(LabelCatalog::from_json_str(r#"["a", "b"]"#).is_err());
    }

    #[test]
    fn test_from_path_is_best_effort() {
        assert_eq!(
            LabelCatalog::from_path("/nonexistent/labels.json"),
            LabelCatalog::NotLoaded
        );

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"2": "Septoria Leaf Spot"}}"#).unwrap();
        let catalog = LabelCatalog::from_path(file.path());
        assert!(catalog.is_loaded());
        assert_eq!(catalog.resolve(2, None), "Septoria Leaf Spot");
    }
}
