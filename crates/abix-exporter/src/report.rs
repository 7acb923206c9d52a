//! End-of-run report

use abix_runtime::{AbixError, FileOutcome};
use serde::Serialize;

/// Outcome of every directory entry seen by a run, sorted by file name
#[derive(Debug, Serialize)]
pub struct RunReport {
    written: usize,
    skipped: usize,
    failed: usize,
    outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn new(mut outcomes: Vec<FileOutcome>) -> Self {
        outcomes.sort_by(|a, b| a.name.cmp(&b.name));

        let written = outcomes.iter().filter(|o| o.is_written()).count();
        let skipped = outcomes.iter().filter(|o| o.is_skipped()).count();
        let failed = outcomes.iter().filter(|o| o.is_failed()).count();

        Self { written, skipped, failed, outcomes }
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, name: &str) -> Option<&FileOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Failed entries with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&str, &AbixError)> {
        self.outcomes.iter().filter_map(|o| o.error().map(|e| (o.name.as_str(), e)))
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// One-line summary, e.g. `3 artifacts: 2 written, 1 skipped, 0 failed`
    pub fn summary(&self) -> String {
        format!(
            "{} artifact{}: {} written, {} skipped, {} failed",
            self.total(),
            if self.total() == 1 { "" } else { "s" },
            self.written,
            self.skipped,
            self.failed
        )
    }
}
