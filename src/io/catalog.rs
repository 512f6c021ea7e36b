use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{PuzzleError, Result};

/// Sorted listing of the puzzle images found in one directory
///
/// Scanning is shallow and tolerant: unsupported files are ignored and an
/// empty directory produces an empty catalog rather than an error.
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    paths: Vec<PathBuf>,
}

impl ImageCatalog {
    /// Scan `dir` for supported image files
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the directory cannot be read.
    pub fn scan(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir).map_err(|e| PuzzleError::FileSystem {
            path: dir.to_path_buf(),
            operation: "read directory",
            source: e,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| PuzzleError::FileSystem {
                    path: dir.to_path_buf(),
                    operation: "read directory entry",
                    source: e,
                })?
                .path();

            if path.is_file() && is_supported_image(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(Self { paths })
    }

    /// Paths in play order (lexicographic)
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Number of images found
    pub const fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check whether the scan found nothing playable
    pub const fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Consume the catalog, yielding the sorted paths
    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

/// Check whether a path carries a supported image extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
