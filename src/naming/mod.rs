/// Filename parsing
///
/// Each naming scheme turns a filename stem into a group key, and the
/// structured scheme also yields an ordering key:
/// - Generic 6-character product prefix (generic.rs)
/// - Brand article/view/sequence names (structured.rs)
/// - Camera view priority table (views.rs)

pub mod generic;
pub mod structured;
pub mod views;
