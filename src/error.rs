//! Crate-wide error type.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed parameter file {}: {source}", .path.display())]
    Json {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid range `{name}`: {reason}")]
    InvalidRange { name: String, reason: String },

    #[error("label collision on `{label}`: `{first}` and `{second}` format identically")]
    LabelCollision { label: String, first: String, second: String },

    #[error("manifest write failed: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }

    pub(crate) fn invalid_range(name: &str, reason: impl Into<String>) -> Self {
        Error::InvalidRange { name: name.to_string(), reason: reason.into() }
    }
}
