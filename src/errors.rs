//! Error types for csa-indicators
//!
//! Each error type has a corresponding error code for programmatic handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for csa-indicators operations
pub type Result<T> = std::result::Result<T, CsaError>;

/// Main error type for all path and enumeration operations
#[derive(Debug, Error)]
pub enum CsaError {
    /// No ancestor of the start directory contains the .git marker
    #[error("Repository root not found: {0}")]
    RepoRootNotFound(String),

    /// The INDICATORS directory does not exist
    #[error("Data root missing: {}", .0.display())]
    DataRootMissing(PathBuf),

    /// An output directory could not be created
    #[error("Cannot create directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An enumeration target is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// No indicator file matched a basename lookup
    #[error("Indicator not found: {0}")]
    IndicatorNotFound(String),

    /// More than one indicator file matched a basename lookup
    #[error(
        "Basename {basename} is ambiguous ({count} matches). Examples:\n{}",
        .examples.join("\n")
    )]
    AmbiguousIndicator {
        basename: String,
        count: usize,
        examples: Vec<String>,
    },

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Directory listing failed part way through
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl CsaError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            CsaError::RepoRootNotFound(_) => "REPO_ROOT_NOT_FOUND",
            CsaError::DataRootMissing(_) => "DATA_ROOT_MISSING",
            CsaError::DirectoryCreation { .. } => "DIRECTORY_CREATION",
            CsaError::NotADirectory(_) => "NOT_A_DIRECTORY",
            CsaError::IndicatorNotFound(_) => "INDICATOR_NOT_FOUND",
            CsaError::AmbiguousIndicator { .. } => "AMBIGUOUS_INDICATOR",
            CsaError::InvalidJson(_) => "INVALID_JSON",
            CsaError::ConfigError(_) => "CONFIG_ERROR",
            CsaError::Walk(_) => "WALK_ERROR",
            CsaError::Io(_) => "IO_ERROR",
            CsaError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        CsaError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CsaError::RepoRootNotFound("test".into()).code(), "REPO_ROOT_NOT_FOUND");
        assert_eq!(
            CsaError::DataRootMissing("/repo/INDICATORS".into()).code(),
            "DATA_ROOT_MISSING"
        );
        assert_eq!(CsaError::NotADirectory("/repo/x.csv".into()).code(), "NOT_A_DIRECTORY");
        assert_eq!(CsaError::IndicatorNotFound("x.nc".into()).code(), "INDICATOR_NOT_FOUND");
        assert_eq!(CsaError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(CsaError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(
            CsaError::DirectoryCreation {
                path: "/repo/outputs/tables".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .code(),
            "DIRECTORY_CREATION"
        );
    }

    #[test]
    fn test_directory_creation_message_names_path() {
        let err = CsaError::DirectoryCreation {
            path: "/repo/outputs/figures".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(err.to_string().contains("/repo/outputs/figures"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_ambiguous_message_lists_examples() {
        let err = CsaError::AmbiguousIndicator {
            basename: "tas.nc".into(),
            count: 2,
            examples: vec!["/a/tas.nc".into(), "/b/tas.nc".into()],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 matches"));
        assert!(msg.contains("/a/tas.nc"));
        assert!(msg.contains("/b/tas.nc"));
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = CsaError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}
