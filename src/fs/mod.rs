//! File system utilities for csa-indicators
//!
//! Provides repository root discovery, layout paths, directory provisioning,
//! indicator enumeration and JSON reading.

mod enumerate;
mod json;
mod paths;

pub use enumerate::{resolve_indicator_by_basename, IndicatorDirs, IndicatorFiles};
pub use json::read_json;
pub use paths::{
    config_path, data_root_path, ensure_dir, fig_dir_path, find_marker_root, find_repo_root,
    notebooks_path, outputs_path, table_dir_path, CONFIG_FILE_NAME, DATA_DIR_NAME,
    FIGURES_DIR_NAME, GIT_MARKER, NOTEBOOKS_DIR_NAME, OUTPUTS_DIR_NAME, TABLES_DIR_NAME,
};
