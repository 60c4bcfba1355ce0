//! Loading parameter ranges from a JSON file.
//!
//! Expected shape:
//!
//! ```json
//! [
//!   { "name": "beta",  "min": 2.4, "max": 3.0, "increment": 0.02 },
//!   { "name": "alpha", "min": 0.0, "max": 2.0, "increment": 0.1 }
//! ]
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::range::ParameterRange;

/// Read and decode a parameter file.
pub fn load_ranges(path: impl AsRef<Path>) -> Result<Vec<ParameterRange>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let ranges = decode(&text).map_err(|source| Error::Json { path: path.to_path_buf(), source })?;
    info!("loaded {} parameter ranges from {}", ranges.len(), path.display());
    Ok(ranges)
}

/// Decode ranges from JSON text (no file involved).
pub fn parse_ranges(text: &str) -> Result<Vec<ParameterRange>> {
    decode(text).map_err(|source| Error::Json { path: "<inline>".into(), source })
}

fn decode(text: &str) -> std::result::Result<Vec<ParameterRange>, serde_json::Error> {
    serde_json::from_str(text)
}
