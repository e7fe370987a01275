//! Source File Discovery
//!
//! Expands the input path into the list of Go files to process.

use crate::error::CollectError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const GO_EXTENSION: &str = "go";

fn is_go_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(GO_EXTENSION)
}

/// Resolve `path` to absolute Go file paths: the file itself, or every
/// `.go` file below a directory in file-name order.
pub fn collect_source_files(path: &Path) -> Result<Vec<PathBuf>, CollectError> {
    let abs_path = std::path::absolute(path).map_err(|source| CollectError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = std::fs::metadata(&abs_path).map_err(|source| CollectError::Inaccessible {
        path: abs_path.clone(),
        source,
    })?;

    if metadata.is_file() {
        if is_go_file(&abs_path) {
            return Ok(vec![abs_path]);
        }
        return Err(CollectError::NotGoFile { path: abs_path });
    }

    if metadata.is_dir() {
        let mut files = Vec::new();
        for entry in WalkDir::new(&abs_path).sort_by_file_name() {
            let entry = entry.map_err(|source| CollectError::Walk {
                path: abs_path.clone(),
                source,
            })?;
            if entry.file_type().is_file() && is_go_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        if files.is_empty() {
            return Err(CollectError::NoGoFiles { path: abs_path });
        }
        tracing::debug!("found {} Go file(s) under {}", files.len(), abs_path.display());
        return Ok(files);
    }

    Err(CollectError::Unsupported { path: abs_path })
}
