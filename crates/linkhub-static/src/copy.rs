//! Recursive directory copy that skips sentinel files.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use linkhub_config::SENTINEL_FILE;

/// Errors that can occur while copying a tree.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("Source directory not found: {0}")]
    MissingSource(PathBuf),

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to copy {from} to {to}: {source}")]
    Io {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Copy everything under `src` into `dst`, creating directories as needed.
///
/// Files named [`SENTINEL_FILE`] are skipped. Existing files in `dst` are
/// overwritten. Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, CopyError> {
    if !src.is_dir() {
        return Err(CopyError::MissingSource(src.to_path_buf()));
    }

    let mut copied = 0;

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry.map_err(|e| CopyError::Walk {
            path: src.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();

        if entry.file_name() == SENTINEL_FILE {
            continue;
        }

        let relative = path.strip_prefix(src).unwrap_or(path);
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| CopyError::Io {
                from: path.to_path_buf(),
                to: target.clone(),
                source: e,
            })?;
            continue;
        }

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| CopyError::Io {
                from: path.to_path_buf(),
                to: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::copy(path, &target).map_err(|e| CopyError::Io {
            from: path.to_path_buf(),
            to: target.clone(),
            source: e,
        })?;
        copied += 1;
    }

    Ok(copied)
}
