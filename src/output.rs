//! Run results: per-entry outcomes and the whole-run summary.

use crate::error::EntryError;

/// What happened to a single manifest entry.
///
/// `Failed` still carries the number of pages that were saved before the
/// error hit: those files stay on disk and stay counted — there is no
/// rollback of a partially converted booklet.
#[derive(Debug)]
pub enum EntryOutcome {
    /// The source PDF does not exist. Not a failure.
    Skipped,
    /// Every page was rasterised, encoded, and written.
    Converted { pages: usize },
    /// The entry aborted partway through.
    Failed {
        pages_saved: usize,
        error: EntryError,
    },
}

/// Counters accumulated across one whole batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Pages successfully written, across all entries.
    pub pages_converted: usize,
    /// Entries that errored out (counted per file, not per page).
    pub files_failed: usize,
    /// Entries whose source PDF was absent.
    pub files_skipped: usize,
    /// Wall-clock duration of the run.
    pub total_duration_ms: u64,
}

impl RunSummary {
    /// Fold one entry outcome into the running counters.
    pub(crate) fn record(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Skipped => self.files_skipped += 1,
            EntryOutcome::Converted { pages } => self.pages_converted += pages,
            EntryOutcome::Failed { pages_saved, .. } => {
                self.pages_converted += pages_saved;
                self.files_failed += 1;
            }
        }
    }
}
