use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while normalizing or renaming a folder.
///
/// Only the folder-level variants (`MissingFolder`, `NotADirectory`,
/// `ListFolder`, `Worker`) end a pass. Everything else belongs to a single
/// file and is recorded in the run summary.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("folder does not exist: {}", .0.display())]
    MissingFolder(PathBuf),

    #[error("path is not a folder: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to list {}: {source}", path.display())]
    ListFolder {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("converted but could not remove {}: {source}", path.display())]
    RemoveOriginal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename {} to {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("background worker stopped: {0}")]
    Worker(String),
}
