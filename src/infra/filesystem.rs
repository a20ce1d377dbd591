//! Filesystem operations
//!
//! Handles file and directory operations for the output directory.

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

/// Remove a directory and all its contents
pub fn remove_dir_all(path: &Path) -> Result<(), FilesystemError> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| FilesystemError::RemoveDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
    }
    Ok(())
}

/// Copy a single file, creating the destination's parent directories
pub fn copy_file(from: &Path, to: &Path) -> Result<(), FilesystemError> {
    if let Some(parent) = to.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(from, to)
        .map(|_| ())
        .map_err(|e| FilesystemError::CopyFile {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            error: e.to_string(),
        })
}

/// Copy a file or a whole directory tree
///
/// Returns the number of files copied.
pub fn copy_path(from: &Path, to: &Path) -> Result<usize, FilesystemError> {
    if from.is_file() {
        copy_file(from, to)?;
        return Ok(1);
    }

    let mut copied = 0;
    for entry in WalkDir::new(from)
        .follow_links(false)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let Ok(relative) = entry.path().strip_prefix(from) else {
            continue;
        };
        copy_file(entry.path(), &to.join(relative))?;
        copied += 1;
    }
    Ok(copied)
}

/// First file under `dir` accepted by `predicate`
///
/// Directories whose name is in `skip` are not descended into.
pub fn find_file(dir: &Path, skip: &[&str], predicate: impl Fn(&Path) -> bool) -> Option<PathBuf> {
    WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir()
                && e.file_name().to_str().is_some_and(|name| skip.contains(&name)))
        })
        .filter_map(Result::ok)
        .find(|e| e.file_type().is_file() && predicate(e.path()))
        .map(walkdir::DirEntry::into_path)
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
