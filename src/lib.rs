//! Product photography renamer
//!
//! Normalizes a folder of product shots to JPEG and renames every product
//! group into a `<code>-<NN>.jpg` sequence. Two naming schemes are supported:
//! - Generic: the first 6 characters of the filename are the product code
//! - Structured: `BRAND_ARTICLE_PHxxxNNN[-suffix].ext`, ordered by camera view
//!
//! The desktop shell in `main.rs` drives this library from a background worker.

pub mod error;
pub mod media;
pub mod naming;
pub mod rename;
pub mod scan;
pub mod state;

pub use error::RenameError;
pub use media::convert::{convert_folder_to_jpeg, convert_to_jpeg, Conversion, JPEG_QUALITY};
pub use rename::pass::{rename_generic, rename_structured, run, run_in_background};
pub use state::data::{Scheme, SourceFile};
pub use state::events::{Callbacks, EventSink, LogLevel, RenameEvent};
pub use state::summary::{ItemOutcome, RunSummary};
