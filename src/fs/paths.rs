//! Path resolution utilities for csa-indicators
//!
//! Provides functions to locate the repository root and construct the
//! fixed layout paths derived from it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{CsaError, Result};

/// Version-control marker whose presence identifies the repository root.
pub const GIT_MARKER: &str = ".git";

/// Input tree holding one subdirectory per indicator group.
pub const DATA_DIR_NAME: &str = "INDICATORS";

/// Generated artifacts; never committed.
pub const OUTPUTS_DIR_NAME: &str = "outputs";

pub const TABLES_DIR_NAME: &str = "tables";

pub const FIGURES_DIR_NAME: &str = "figures";

/// Documented launch directory for notebooks.
pub const NOTEBOOKS_DIR_NAME: &str = "notebooks";

/// Optional enumeration settings, read from the repository root.
pub const CONFIG_FILE_NAME: &str = "csa.json";

/// Find the repository root containing a .git marker.
///
/// Walks up the directory tree from the starting directory and returns the
/// first directory that contains `.git`. With nested repositories the
/// innermost one wins.
///
/// # Arguments
/// * `start_dir` - The directory to start searching from
///
/// # Returns
/// The canonical path to the repository root
///
/// # Errors
/// * `RepoRootNotFound` - If `start_dir` cannot be resolved
/// * `RepoRootNotFound` - If the filesystem root is reached without a match
pub fn find_repo_root(start_dir: &Path) -> Result<PathBuf> {
    find_marker_root(start_dir, GIT_MARKER)
}

/// Find the nearest ancestor of `start_dir` (inclusive) containing `marker`.
///
/// The marker may be a file or a directory, so git worktrees and submodules
/// (where `.git` is a file) resolve the same way as ordinary checkouts.
pub fn find_marker_root(start_dir: &Path, marker: &str) -> Result<PathBuf> {
    let mut current = start_dir.canonicalize().map_err(|e| {
        CsaError::RepoRootNotFound(format!(
            "Cannot resolve start directory {}: {}",
            start_dir.display(),
            e
        ))
    })?;

    loop {
        if current.join(marker).exists() {
            tracing::debug!(root = %current.display(), marker, "found repository root");
            return Ok(current);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => {
                return Err(CsaError::RepoRootNotFound(format!(
                    "no {} found in {} or any of its ancestors",
                    marker,
                    start_dir.display()
                )));
            }
        }
    }
}

/// Get the path to the INDICATORS input tree. Not created.
pub fn data_root_path(root: &Path) -> PathBuf {
    root.join(DATA_DIR_NAME)
}

/// Get the path to the outputs directory.
pub fn outputs_path(root: &Path) -> PathBuf {
    root.join(OUTPUTS_DIR_NAME)
}

/// Get the path to the tables output directory.
pub fn table_dir_path(root: &Path) -> PathBuf {
    outputs_path(root).join(TABLES_DIR_NAME)
}

/// Get the path to the figures output directory.
pub fn fig_dir_path(root: &Path) -> PathBuf {
    outputs_path(root).join(FIGURES_DIR_NAME)
}

/// Get the path to the notebooks directory.
pub fn notebooks_path(root: &Path) -> PathBuf {
    root.join(NOTEBOOKS_DIR_NAME)
}

/// Get the path to the csa.json config file.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE_NAME)
}

/// Create `path` and any missing parents.
///
/// Succeeds when the directory already exists, leaving its contents alone.
///
/// # Errors
/// * `DirectoryCreation` - If creation fails, including when `path` is an
///   existing non-directory
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|source| CsaError::DirectoryCreation {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "created directory");

    Ok(())
}
