//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{CsaError, Result};
use crate::fs;
use crate::schemas::Config;

/// Schema version this crate understands.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

/// Load configuration from the repository, falling back to defaults.
///
/// If csa.json exists at the repository root, it is read and merged with
/// defaults. If it doesn't exist, default configuration is returned.
///
/// # Arguments
/// * `root` - Path to the repository root
///
/// # Returns
/// The resolved configuration
///
/// # Errors
/// * `InvalidJson` - If csa.json is malformed
/// * `ConfigError` - If csa.json declares an unsupported schema version
pub fn load_config(root: &Path) -> Result<Config> {
    let path = fs::config_path(root);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config: Config = fs::read_json(&path)?;
    if config.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(CsaError::ConfigError(format!(
            "{} declares schema_version {}, expected {}",
            path.display(),
            config.schema_version,
            SUPPORTED_SCHEMA_VERSION
        )));
    }

    Ok(config)
}
