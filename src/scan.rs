//! Folder listing
//!
//! Lists the files directly inside one folder (non-recursive), sorted by
//! file name so every pass enumerates files in the same order.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::RenameError;
use crate::state::data::SourceFile;

/// Check that `folder` exists and is a directory
pub fn ensure_folder(folder: &Path) -> Result<(), RenameError> {
    let metadata = fs::metadata(folder).map_err(|_| RenameError::MissingFolder(folder.to_path_buf()))?;
    if !metadata.is_dir() {
        return Err(RenameError::NotADirectory(folder.to_path_buf()));
    }
    Ok(())
}

/// True when any filesystem entry (including a dangling symlink) sits at `path`
pub fn is_occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// List regular files in `folder` whose lowercase extension satisfies `keep`
pub fn list_files(folder: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<SourceFile>, RenameError> {
    ensure_folder(folder)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) if source.depth() == 0 => {
                return Err(RenameError::ListFolder {
                    path: folder.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file) = SourceFile::from_path(entry.into_path()) else {
            continue;
        };
        if keep(&file.extension) {
            tracing::debug!("Found {}", file.file_name());
            files.push(file);
        }
    }

    Ok(files)
}
