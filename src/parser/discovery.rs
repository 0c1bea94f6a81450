//! Document discovery on the filesystem.

use crate::core::{ScanViewError, ScanViewResult};
use std::path::{Path, PathBuf};

/// File extensions recognized as scanned documents (matched case-insensitively).
const DOCUMENT_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

/// Enumerates the scanned documents inside a folder.
///
/// Files with a `.tif` or `.tiff` extension (case-insensitive) are returned
/// sorted lexicographically by path. A missing folder is a hard error; a
/// folder that exists but contains no matching files yields an empty list.
pub fn discover_documents(folder: &Path) -> ScanViewResult<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(ScanViewError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                DOCUMENT_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false);
        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
