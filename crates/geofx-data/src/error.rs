//! Error types for the data collaborators.

use std::path::PathBuf;

use thiserror::Error;

use geofx_spec::BackendError;

use crate::geometry::ChainError;

/// A single geometry source failed to produce a collection.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("region {adcode} not found")]
    NotFound { adcode: u32 },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("region {adcode} is not a valid feature collection: {source}")]
    Parse {
        adcode: u32,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError for SourceError {
    fn code(&self) -> &'static str {
        match self {
            SourceError::NotFound { .. } => "DATA_001",
            SourceError::Io { .. } => "DATA_002",
            SourceError::Parse { .. } => "DATA_003",
            SourceError::Http { .. } => "DATA_004",
            SourceError::HttpStatus { .. } => "DATA_005",
        }
    }

    fn category(&self) -> &'static str {
        "geometry"
    }
}

impl BackendError for ChainError {
    fn code(&self) -> &'static str {
        if self.failures.is_empty() {
            "DATA_010"
        } else {
            "DATA_011"
        }
    }

    fn category(&self) -> &'static str {
        "geometry"
    }
}
