//! csa-indicators - Shared path resolution for per-CSA climate indicator work
//!
//! This library provides:
//! - Repository root discovery by walking up to the nearest `.git`
//! - Fixed layout paths (`INDICATORS/`, `outputs/tables/`, `outputs/figures/`)
//!   with on-demand creation of the output directories
//! - Lazy, restartable enumeration of indicator directories and files
//! - Optional enumeration settings read from `csa.json`

pub mod config;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod resolver;
pub mod schemas;


// Re-export commonly used types
pub use errors::{CsaError, Result};
pub use fs::{IndicatorDirs, IndicatorFiles};
pub use resolver::{
    data_root, fig_dir, iter_indicator_files, iter_indicators_dirs, repo_root,
    resolve_indicator_by_basename, resolve_repo_root, table_dir, PathResolver,
};
pub use schemas::{Config, EnumerationOptions};
