/// Result of handling one file during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Re-encoded to JPEG, original removed
    Converted,
    /// Moved to its sequential name
    Renamed,
    /// Target name already taken; file left as is
    Skipped,
    /// Filename did not match the naming scheme; file left as is
    Unparsed,
    /// Conversion or rename failed
    Failed(String),
}

/// Counters and collected errors for one pass over a folder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Image files found when the pass started
    pub discovered_count: usize,
    pub converted_count: usize,
    pub renamed_count: usize,
    pub skipped_count: usize,
    pub unparsed_count: usize,
    pub failed_count: usize,
    /// Number of groups renamed
    pub group_count: usize,
    /// One message per failed item
    pub errors: Vec<String>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: ItemOutcome) {
        match outcome {
            ItemOutcome::Converted => self.converted_count += 1,
            ItemOutcome::Renamed => self.renamed_count += 1,
            ItemOutcome::Skipped => self.skipped_count += 1,
            ItemOutcome::Unparsed => self.unparsed_count += 1,
            ItemOutcome::Failed(reason) => {
                self.failed_count += 1;
                self.errors.push(reason);
            }
        }
    }

    /// True when no item failed
    pub fn is_clean(&self) -> bool {
        self.failed_count == 0
    }
}
