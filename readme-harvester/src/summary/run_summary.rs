//! Run summary types.

use super::result::ProcessingResult;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repository entries processed.
    pub processed: usize,

    /// Number of README files written.
    pub saved: usize,

    /// Number of entries skipped (malformed, rejected, or unavailable).
    pub skipped: usize,

    /// Number of entries that failed at the persistence stage.
    pub failed: usize,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the summary with a processing result.
    pub fn record(&mut self, result: &ProcessingResult) {
        self.processed += 1;
        match result {
            ProcessingResult::Saved { .. } => self.saved += 1,
            ProcessingResult::Skipped { .. } => self.skipped += 1,
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns true if any write failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// Returns true if every processed entry produced a file.
    #[must_use]
    pub fn all_saved(&self) -> bool {
        self.saved == self.processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::SkipReason;
    use std::path::PathBuf;

    #[test]
    fn can_record_results() {
        let mut summary = RunSummary::new();

        summary.record(&ProcessingResult::Saved {
            repository: "octocat/Hello-World".to_string(),
            path: PathBuf::from("output/Hello-World.md"),
        });
        summary.record(&ProcessingResult::Skipped {
            repository: "left-pad".to_string(),
            reason: SkipReason::MalformedEntry,
        });
        summary.record(&ProcessingResult::Failed {
            repository: "a/b".to_string(),
            error: "disk full".to_string(),
        });

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.saved, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed, 1);
        assert!(summary.has_failures());
        assert!(!summary.all_saved());
    }

    #[test]
    fn all_saved_on_clean_run() {
        let mut summary = RunSummary::new();
        summary.record(&ProcessingResult::Saved {
            repository: "a/b".to_string(),
            path: PathBuf::from("output/b.md"),
        });

        assert!(summary.all_saved());
        assert!(!summary.has_failures());
    }
}
