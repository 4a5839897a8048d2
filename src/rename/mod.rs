/// Grouping, ordering and renaming
///
/// This module handles:
/// - Bucketing parsed files into groups and numbering them (plan.rs)
/// - Applying a plan to the filesystem without overwriting (executor.rs)
/// - Running a whole pass over a folder, in place or on a worker (pass.rs)

pub mod executor;
pub mod pass;
pub mod plan;
