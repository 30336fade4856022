//! Config schema - Optional settings read from csa.json

use serde::{Deserialize, Serialize};

/// How indicator directories and files are enumerated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationOptions {
    /// Descend into nested directories when listing indicator files
    #[serde(default)]
    pub recursive: bool,

    /// Only yield files with this extension (e.g., "nc"); None yields every file
    #[serde(default)]
    pub extension: Option<String>,

    /// Directory names skipped during enumeration
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

fn default_ignore() -> Vec<String> {
    [".git", ".ipynb_checkpoints", ".cache", "outputs"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for EnumerationOptions {
    fn default() -> Self {
        EnumerationOptions {
            recursive: false,
            extension: None,
            ignore: default_ignore(),
        }
    }
}

impl EnumerationOptions {
    /// Same options with recursion switched on or off.
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Same options restricted to files ending in `.{extension}`.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Whether a directory entry name is in the ignore list.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }
}

/// Main configuration for csa-indicators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Enumeration settings
    #[serde(default)]
    pub enumeration: EnumerationOptions,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            enumeration: EnumerationOptions::default(),
        }
    }
}
