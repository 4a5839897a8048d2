//! Rename executor
//!
//! Applies a group's plan to the filesystem. A target name that is already
//! taken is skipped, never overwritten.

use std::fs;
use std::path::Path;

use crate::error::RenameError;
use crate::rename::plan::PlanEntry;
use crate::scan;
use crate::state::events::Reporter;
use crate::state::summary::{ItemOutcome, RunSummary};

/// Outcome of a single rename attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// Something already sits at the target name
    TargetExists,
}

/// Running `(done, total)` counter for a whole pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Progress { done: 0, total }
    }
}

/// Rename one entry to `folder/<target_name>` unless the target is taken
pub fn rename_entry(folder: &Path, entry: &PlanEntry) -> Result<RenameOutcome, RenameError> {
    let target = folder.join(&entry.target_name);
    if scan::is_occupied(&target) {
        return Ok(RenameOutcome::TargetExists);
    }

    fs::rename(&entry.source.path, &target).map_err(|e| RenameError::Rename {
        from: entry.source.path.clone(),
        to: target,
        source: e,
    })?;
    Ok(RenameOutcome::Renamed)
}

/// Rename every entry of a planned group, reporting progress after each one
/// whatever its outcome
pub fn execute_group(
    folder: &Path,
    plan: Vec<PlanEntry>,
    progress: &mut Progress,
    reporter: &Reporter<'_>,
    summary: &mut RunSummary,
) {
    for entry in plan {
        let old_name = entry.source.file_name();

        let outcome = match rename_entry(folder, &entry) {
            Ok(RenameOutcome::Renamed) => {
                reporter.info(format!("   {}  →  {}", old_name, entry.target_name));
                ItemOutcome::Renamed
            }
            Ok(RenameOutcome::TargetExists) => {
                reporter.warn(format!("{} already exists, skipping {}", entry.target_name, old_name));
                ItemOutcome::Skipped
            }
            Err(e) => {
                reporter.error(e.to_string());
                ItemOutcome::Failed(e.to_string())
            }
        };
        summary.record(outcome);

        progress.done += 1;
        reporter.progress(progress.done, progress.total);
    }
}
