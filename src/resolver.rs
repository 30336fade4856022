//! Repository-anchored path resolution
//!
//! `PathResolver` owns a starting directory and lazily resolves the
//! repository root from it. The root (and the config read from it) is
//! written at most once behind a `OnceCell`; concurrent callers either block
//! until the first resolution finishes or see the finished value.
//!
//! The free functions at the bottom of this module share one process-wide
//! resolver anchored at the working directory, which is what notebook code
//! launched from `notebooks/` uses.

use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;

use crate::config::load_config;
use crate::errors::Result;
use crate::fs::{
    self, data_root_path, ensure_dir, fig_dir_path, find_repo_root, notebooks_path,
    outputs_path, table_dir_path, IndicatorDirs, IndicatorFiles,
};
use crate::schemas::{Config, EnumerationOptions};

/// Resolves and caches the repository root and the paths derived from it.
#[derive(Debug)]
pub struct PathResolver {
    start: PathBuf,
    root: OnceCell<PathBuf>,
    config: OnceCell<Config>,
}

impl PathResolver {
    /// Create a resolver that will search upward from `start`.
    ///
    /// Nothing is read from disk until a path is requested.
    pub fn new(start: impl Into<PathBuf>) -> Self {
        PathResolver {
            start: start.into(),
            root: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// Create a resolver anchored at the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        Ok(PathResolver::new(std::env::current_dir()?))
    }

    /// Use `config` instead of reading csa.json.
    pub fn with_config(self, config: Config) -> Self {
        PathResolver {
            config: OnceCell::with_value(config),
            ..self
        }
    }

    /// The directory resolution starts from.
    pub fn start(&self) -> &Path {
        &self.start
    }

    /// The repository root, resolved on first call.
    pub fn repo_root(&self) -> Result<&Path> {
        self.repo_root_from(&self.start)
    }

    /// The repository root, walking from `start_dir` if nothing is cached yet.
    ///
    /// Once a root has been resolved it is returned for every later call,
    /// whatever `start_dir` is. Failures are not cached.
    pub fn repo_root_from(&self, start_dir: &Path) -> Result<&Path> {
        self.root
            .get_or_try_init(|| find_repo_root(start_dir))
            .map(PathBuf::as_path)
    }

    /// Configuration from csa.json at the repository root, or defaults.
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| load_config(self.repo_root()?))
    }

    /// `<root>/INDICATORS`. Not created; may not exist.
    pub fn data_root(&self) -> Result<PathBuf> {
        Ok(data_root_path(self.repo_root()?))
    }

    /// `<root>/outputs`, created if missing.
    pub fn outputs_dir(&self) -> Result<PathBuf> {
        let path = outputs_path(self.repo_root()?);
        ensure_dir(&path)?;
        Ok(path)
    }

    /// `<root>/outputs/tables`, created if missing.
    pub fn table_dir(&self) -> Result<PathBuf> {
        let path = table_dir_path(self.repo_root()?);
        ensure_dir(&path)?;
        Ok(path)
    }

    /// `<root>/outputs/figures`, created if missing.
    pub fn fig_dir(&self) -> Result<PathBuf> {
        let path = fig_dir_path(self.repo_root()?);
        ensure_dir(&path)?;
        Ok(path)
    }

    /// `<root>/notebooks`. Not created.
    pub fn notebooks_dir(&self) -> Result<PathBuf> {
        Ok(notebooks_path(self.repo_root()?))
    }

    /// Indicator group directories under the data root.
    ///
    /// # Errors
    /// * `DataRootMissing` - If `<root>/INDICATORS` does not exist
    pub fn iter_indicators_dirs(&self) -> Result<IndicatorDirs> {
        IndicatorDirs::open(&self.data_root()?, &self.config()?.enumeration)
    }

    /// Files in `indicator_dir`, using the configured enumeration options.
    ///
    /// # Errors
    /// * `NotADirectory` - If `indicator_dir` is not a directory
    pub fn iter_indicator_files(&self, indicator_dir: &Path) -> Result<IndicatorFiles> {
        IndicatorFiles::open(indicator_dir, &self.config()?.enumeration)
    }

    /// Files in `indicator_dir`, using explicit enumeration options.
    pub fn iter_indicator_files_with(
        &self,
        indicator_dir: &Path,
        options: &EnumerationOptions,
    ) -> Result<IndicatorFiles> {
        IndicatorFiles::open(indicator_dir, options)
    }

    /// The single file named `basename` in any indicator directory.
    pub fn resolve_indicator_by_basename(&self, basename: &str) -> Result<PathBuf> {
        fs::resolve_indicator_by_basename(
            &self.data_root()?,
            basename,
            &self.config()?.enumeration,
        )
    }
}

static PROCESS_RESOLVER: OnceCell<PathResolver> = OnceCell::new();

fn process_resolver() -> Result<&'static PathResolver> {
    PROCESS_RESOLVER.get_or_try_init(PathResolver::from_current_dir)
}

/// Resolve the process-wide repository root, walking from `start_dir` on
/// first use. Later calls return the cached root.
///
/// When no process-wide resolver exists yet it is anchored at `start_dir`,
/// so the working directory is never consulted here.
pub fn resolve_repo_root(start_dir: &Path) -> Result<&'static Path> {
    PROCESS_RESOLVER
        .get_or_init(|| PathResolver::new(start_dir))
        .repo_root_from(start_dir)
}

/// The process-wide repository root, found from the working directory.
pub fn repo_root() -> Result<&'static Path> {
    process_resolver()?.repo_root()
}

/// `<REPO_ROOT>/INDICATORS`.
pub fn data_root() -> Result<PathBuf> {
    process_resolver()?.data_root()
}

/// `<REPO_ROOT>/outputs/tables`, created if missing.
pub fn table_dir() -> Result<PathBuf> {
    process_resolver()?.table_dir()
}

/// `<REPO_ROOT>/outputs/figures`, created if missing.
pub fn fig_dir() -> Result<PathBuf> {
    process_resolver()?.fig_dir()
}

/// Indicator group directories under `<REPO_ROOT>/INDICATORS`.
pub fn iter_indicators_dirs() -> Result<IndicatorDirs> {
    process_resolver()?.iter_indicators_dirs()
}

/// Files in one indicator directory.
pub fn iter_indicator_files(indicator_dir: &Path) -> Result<IndicatorFiles> {
    process_resolver()?.iter_indicator_files(indicator_dir)
}

/// The single file named `basename` under `<REPO_ROOT>/INDICATORS`.
pub fn resolve_indicator_by_basename(basename: &str) -> Result<PathBuf> {
    process_resolver()?.resolve_indicator_by_basename(basename)
}
