//! JSON file reading with schema validation

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::errors::{CsaError, Result};

/// Read and deserialize a JSON file.
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Returns
/// The deserialized value
///
/// # Errors
/// * `Io` - If the file cannot be read (including when it does not exist)
/// * `InvalidJson` - If the file is not valid JSON or does not match the expected schema
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)?;

    serde_json::from_str(&content).map_err(|e| {
        CsaError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}
