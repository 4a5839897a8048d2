//! Shared data structures for a rename pass
//!
//! These structs represent the data model that flows from the folder
//! scan through conversion, parsing and grouping to the rename executor.

use std::fmt;
use std::path::PathBuf;

/// Raster formats recognized in an asset folder (lowercase, no dot)
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "webp", "tif", "tiff", "bmp"];

/// True for any extension in [`IMAGE_EXTENSIONS`]
pub fn is_image_extension(extension: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extension)
}

/// True for both `jpg` and `jpeg`
pub fn is_jpeg_extension(extension: &str) -> bool {
    matches!(extension, "jpg" | "jpeg")
}

/// Represents a single file found in the asset folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Full path to the file
    pub path: PathBuf,
    /// Filename without its final extension (e.g., "AURORA_415445-101_PHCFH001")
    pub stem: String,
    /// Lowercase extension without the dot (e.g., "png")
    pub extension: String,
}

impl SourceFile {
    /// Build a SourceFile from a path. Files without an extension yield None.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        let stem = path.file_stem()?.to_string_lossy().into_owned();

        Some(SourceFile {
            path,
            stem,
            extension,
        })
    }

    /// Filename only (e.g., "DSC_0001.PNG")
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned()
    }
}

/// Key used to order entries within a group before numbering
///
/// Entries of one group always carry the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OrderKey {
    /// Position in the filename-sorted folder listing (generic scheme)
    Listing(usize),
    /// Camera view priority, then shot number (structured scheme)
    View { rank: u8, sequence: u64 },
}

/// A file whose name matched the active naming scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub group_key: String,
    pub order_key: OrderKey,
    pub source: SourceFile,
}

/// Naming scheme applied to a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// 6-character prefix code, listing order
    #[default]
    Generic,
    /// Article code and view code, ordered by view
    Structured,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Generic, Scheme::Structured];
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Generic => write!(f, "Generic (6-char prefix)"),
            Scheme::Structured => write!(f, "Structured (article / view)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_file_lowercases_extension() {
        let file = SourceFile::from_path("/assets/AURORA_415445-101_PHCFH001.PNG").unwrap();
        assert_eq!(file.stem, "AURORA_415445-101_PHCFH001");
        assert_eq!(file.extension, "png");
        assert_eq!(file.file_name(), "AURORA_415445-101_PHCFH001.PNG");
    }

    #[test]
    fn test_extension_classes() {
        assert!(is_image_extension("webp"));
        assert!(is_image_extension("jpeg"));
        assert!(!is_image_extension("txt"));
        assert!(is_jpeg_extension("jpg"));
        assert!(is_jpeg_extension("jpeg"));
        assert!(!is_jpeg_extension("png"));
    }

    #[test]
    fn test_source_file_without_extension() {
        assert!(SourceFile::from_path("/assets/README").is_none());
    }

    #[test]
    fn test_order_key_view_sorts_by_rank_then_sequence() {
        let front_late = OrderKey::View { rank: 0, sequence: 7 };
        let left_early = OrderKey::View { rank: 1, sequence: 1 };
        let front_early = OrderKey::View { rank: 0, sequence: 2 };

        let mut keys = vec![left_early, front_late, front_early];
        keys.sort();
        assert_eq!(keys, vec![front_early, front_late, left_early]);
    }
}
