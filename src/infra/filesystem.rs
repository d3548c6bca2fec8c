//! Filesystem operations

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Immediate subdirectories containing the given build manifest
///
/// Filesystem iteration order is platform-dependent, so entries are sorted
/// by file name to keep discovered bundle builds deterministic.
pub fn buildable_subdirs(path: &Path, manifest: &str) -> Result<Vec<PathBuf>, FilesystemError> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| FilesystemError::ReadDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        if entry.file_type().is_dir() && entry.path().join(manifest).is_file() {
            dirs.push(entry.path().to_path_buf());
        }
    }
    Ok(dirs)
}
