//! Enumeration of indicator directories and files
//!
//! Listings are lazy and restartable: `IndicatorDirs` and `IndicatorFiles`
//! hold only the directory to list, and every call to `iter()` starts a
//! fresh walk. Nothing here writes to the data tree.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::errors::{CsaError, Result};
use crate::schemas::EnumerationOptions;

/// Maximum number of example paths reported for an ambiguous basename.
const AMBIGUOUS_EXAMPLE_LIMIT: usize = 10;

/// Immediate subdirectories of the data root, one per indicator group.
#[derive(Debug, Clone)]
pub struct IndicatorDirs {
    data_root: PathBuf,
    options: EnumerationOptions,
}

impl IndicatorDirs {
    /// Prepare a listing of `data_root`.
    ///
    /// # Errors
    /// * `DataRootMissing` - If `data_root` does not exist
    /// * `NotADirectory` - If `data_root` exists but is not a directory
    pub fn open(data_root: &Path, options: &EnumerationOptions) -> Result<Self> {
        if !data_root.exists() {
            return Err(CsaError::DataRootMissing(data_root.to_path_buf()));
        }
        if !data_root.is_dir() {
            return Err(CsaError::NotADirectory(data_root.to_path_buf()));
        }

        Ok(IndicatorDirs {
            data_root: data_root.canonicalize()?,
            options: options.clone(),
        })
    }

    /// The directory being listed.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Walk the data root once, yielding indicator directories sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        walk(&self.data_root, 1, &self.options).filter_map(|entry| match entry {
            Ok(entry) if entry.file_type().is_dir() => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
    }
}

impl<'a> IntoIterator for &'a IndicatorDirs {
    type Item = Result<PathBuf>;
    type IntoIter = Box<dyn Iterator<Item = Result<PathBuf>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Regular files inside one indicator directory.
#[derive(Debug, Clone)]
pub struct IndicatorFiles {
    dir: PathBuf,
    options: EnumerationOptions,
}

impl IndicatorFiles {
    /// Prepare a listing of `dir`. Relative paths are made absolute.
    ///
    /// # Errors
    /// * `NotADirectory` - If `dir` is missing or is not a directory
    pub fn open(dir: &Path, options: &EnumerationOptions) -> Result<Self> {
        if !dir.is_dir() {
            return Err(CsaError::NotADirectory(dir.to_path_buf()));
        }

        Ok(IndicatorFiles {
            dir: dir.canonicalize()?,
            options: options.clone(),
        })
    }

    /// The directory being listed.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Walk the directory once, yielding matching files sorted by name.
    ///
    /// Only direct children are visited unless the options ask for recursion.
    pub fn iter(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        let max_depth = if self.options.recursive { usize::MAX } else { 1 };

        walk(&self.dir, max_depth, &self.options).filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_file() && self.matches_extension(entry.path()) => {
                Some(Ok(entry.into_path()))
            }
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        })
    }

    fn matches_extension(&self, path: &Path) -> bool {
        match &self.options.extension {
            None => true,
            Some(wanted) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted.trim_start_matches('.'))),
        }
    }
}

impl<'a> IntoIterator for &'a IndicatorFiles {
    type Item = Result<PathBuf>;
    type IntoIter = Box<dyn Iterator<Item = Result<PathBuf>> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Find a file by basename within any indicator directory.
///
/// Useful when manifests only store file names. Every indicator directory is
/// searched recursively regardless of `options.recursive`; the ignore list
/// still applies.
///
/// # Errors
/// * `DataRootMissing` - If `data_root` does not exist
/// * `IndicatorNotFound` - If no file is named `basename`
/// * `AmbiguousIndicator` - If more than one file is named `basename`
pub fn resolve_indicator_by_basename(
    data_root: &Path,
    basename: &str,
    options: &EnumerationOptions,
) -> Result<PathBuf> {
    let search = EnumerationOptions {
        recursive: true,
        extension: None,
        ignore: options.ignore.clone(),
    };

    let mut hits = Vec::new();
    for dir in &IndicatorDirs::open(data_root, &search)? {
        let files = IndicatorFiles::open(&dir?, &search)?;
        for file in &files {
            let file = file?;
            if file.file_name().is_some_and(|name| name == basename) {
                hits.push(file);
            }
        }
    }

    match hits.len() {
        0 => Err(CsaError::IndicatorNotFound(format!(
            "Could not find {} under {}",
            basename,
            data_root.display()
        ))),
        1 => Ok(hits.remove(0)),
        count => Err(CsaError::AmbiguousIndicator {
            basename: basename.to_string(),
            count,
            examples: hits
                .iter()
                .take(AMBIGUOUS_EXAMPLE_LIMIT)
                .map(|p| p.display().to_string())
                .collect(),
        }),
    }
}

fn walk<'a>(
    dir: &Path,
    max_depth: usize,
    options: &'a EnumerationOptions,
) -> impl Iterator<Item = Result<DirEntry>> + 'a {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |entry| {
            entry.depth() == 0 || !options.is_ignored(&entry.file_name().to_string_lossy())
        })
        .filter_map(|entry| match entry {
            Ok(entry) => Some(Ok(entry)),
            Err(e) if is_dangling_link(&e) => {
                tracing::debug!(path = ?e.path(), "skipping dangling symlink");
                None
            }
            Err(e) => Some(Err(CsaError::from(e))),
        })
}

/// A link below the listed directory whose target no longer exists.
///
/// Loops and permission failures are not dangling links and stay errors.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() >= 1
        && err
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}
