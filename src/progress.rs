//! Progress-callback trait for per-entry and per-page conversion events.
//!
//! Inject an [`Arc<dyn BatchProgressCallback>`] via
//! [`crate::config::ConvertConfigBuilder::progress_callback`] to receive
//! events as the batch works through the manifest. The callback approach
//! keeps the library ignorant of how the host reports progress — the CLI
//! forwards events to an indicatif bar, tests count them with atomics.
//!
//! The run is strictly single-threaded, but the trait is `Send + Sync` so
//! the same callback object can be shared with other threads of the host
//! application (a UI thread polling counters, for instance).

use crate::manifest::BessatsuEntry;
use crate::output::RunSummary;
use std::sync::Arc;

/// Called by the batch loop as it processes each manifest entry.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Events for one entry always arrive in order:
/// `on_entry_start`, then zero or more `on_page_saved`, then at most one
/// `on_entry_failed`.
pub trait BatchProgressCallback: Send + Sync {
    /// Called once before the first entry, with the manifest length.
    fn on_run_start(&self, total_entries: usize) {
        let _ = total_entries;
    }

    /// Called when an entry's PDF has been found and conversion begins.
    fn on_entry_start(&self, index: usize, total_entries: usize, entry: &BessatsuEntry) {
        let _ = (index, total_entries, entry);
    }

    /// Called when an entry's source PDF is absent. Not a failure.
    fn on_entry_skipped(&self, entry: &BessatsuEntry) {
        let _ = entry;
    }

    /// Called after each page file is written.
    ///
    /// # Arguments
    /// * `page_num`      — 1-indexed page number
    /// * `total_pages`   — page count of the current PDF
    /// * `bytes_written` — size of the WebP file on disk
    fn on_page_saved(&self, page_num: usize, total_pages: usize, bytes_written: u64) {
        let _ = (page_num, total_pages, bytes_written);
    }

    /// Called when every page of an entry has been written.
    fn on_entry_complete(&self, entry: &BessatsuEntry, pages: usize) {
        let _ = (entry, pages);
    }

    /// Called when an entry errors out. The first error ends the entry;
    /// pages saved before it stay on disk.
    fn on_entry_failed(&self, entry: &BessatsuEntry, error: &str) {
        let _ = (entry, error);
    }

    /// Called once after the last entry, with the final counters.
    fn on_run_complete(&self, summary: &RunSummary) {
        let _ = summary;
    }
}

/// A no-op implementation for callers that don't need progress events.
///
/// This is the default when no callback is configured.
pub struct NoopProgressCallback;

impl BatchProgressCallback for NoopProgressCallback {}

/// Convenience alias matching the type stored in [`crate::config::ConvertConfig`].
pub type ProgressCallback = Arc<dyn BatchProgressCallback>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Session;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct TrackingCallback {
        starts: AtomicUsize,
        skips: AtomicUsize,
        pages: AtomicUsize,
        failures: AtomicUsize,
    }

    impl BatchProgressCallback for TrackingCallback {
        fn on_entry_start(&self, _index: usize, _total: usize, _entry: &BessatsuEntry) {
            self.starts.fetch_add(1, Ordering::SeqCst);
        }
        fn on_entry_skipped(&self, _entry: &BessatsuEntry) {
            self.skips.fetch_add(1, Ordering::SeqCst);
        }
        fn on_page_saved(&self, _page: usize, _total: usize, _bytes: u64) {
            self.pages.fetch_add(1, Ordering::SeqCst);
        }
        fn on_entry_failed(&self, _entry: &BessatsuEntry, _error: &str) {
            self.failures.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn noop_callback_does_not_panic() {
        let entry = BessatsuEntry::new(29, Session::Morning, "a.pdf");
        let cb = NoopProgressCallback;
        cb.on_run_start(10);
        cb.on_entry_start(0, 10, &entry);
        cb.on_page_saved(1, 4, 120_000);
        cb.on_entry_skipped(&entry);
        cb.on_entry_failed(&entry, "some error");
        cb.on_run_complete(&RunSummary::default());
    }

    #[test]
    fn tracking_callback_receives_events() {
        let entry = BessatsuEntry::new(30, Session::Afternoon, "b.pdf");
        let cb = TrackingCallback {
            starts: AtomicUsize::new(0),
            skips: AtomicUsize::new(0),
            pages: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
        };

        cb.on_entry_start(0, 2, &entry);
        cb.on_page_saved(1, 2, 100);
        cb.on_page_saved(2, 2, 200);
        cb.on_entry_skipped(&entry);
        cb.on_entry_failed(&entry, "corrupt");

        assert_eq!(cb.starts.load(Ordering::SeqCst), 1);
        assert_eq!(cb.pages.load(Ordering::SeqCst), 2);
        assert_eq!(cb.skips.load(Ordering::SeqCst), 1);
        assert_eq!(cb.failures.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn arc_dyn_callback_works() {
        let cb: Arc<dyn BatchProgressCallback> = Arc::new(NoopProgressCallback);
        cb.on_run_start(10);
        cb.on_run_complete(&RunSummary::default());
    }
}
