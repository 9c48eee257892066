//! Document-level load failures for the product store.

use std::fmt;
use std::path::PathBuf;

/// Why a product document could not be turned into a catalogue.
///
/// Individual bad records never produce this; they are skipped and logged.
#[derive(Debug)]
pub enum CatalogError {
    /// The data file could not be read.
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The document is not valid JSON.
    Json(serde_json::Error),
    /// The document parsed but its top level is not an array.
    NotAnArray,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read product data {}: {source}", path.display())
            }
            Self::Json(e) => write!(f, "product data is not valid JSON: {e}"),
            Self::NotAnArray => f.write_str("product data must be a JSON array of products"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::NotAnArray => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
