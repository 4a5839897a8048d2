/// State shared across a rename pass
///
/// This module holds everything that flows between the pipeline stages:
/// - File and entry data structures (data.rs)
/// - Events pushed to observers while a pass runs (events.rs)
/// - Per-item outcomes and the run summary (summary.rs)

pub mod data;
pub mod events;
pub mod summary;
