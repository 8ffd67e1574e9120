//! Progress reporting for collection runs.
//!
//! This module provides a callback-based progress mechanism for callers who
//! want push-based updates while the collector pages through a member list.
//!
//! # Example
//!
//! ```rust
//! use chatroster::progress::{PageProgress, ProgressCallback};
//! use std::sync::Arc;
//!
//! let callback: ProgressCallback = Arc::new(|progress| {
//!     println!("page {}: {:.1}%", progress.pages_fetched, progress.percentage());
//! });
//!
//! callback(PageProgress::new(1, 150, 300));
//! ```

use std::sync::Arc;

/// Progress of a collection run, reported after every non-empty page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageProgress {
    /// Number of pages received so far.
    pub pages_fetched: usize,

    /// Raw entries accumulated so far.
    pub entries_fetched: usize,

    /// Upper bound on raw entries for this run.
    pub result_cap: usize,
}

impl PageProgress {
    pub fn new(pages_fetched: usize, entries_fetched: usize, result_cap: usize) -> Self {
        Self {
            pages_fetched,
            entries_fetched,
            result_cap,
        }
    }

    /// Returns the share of the cap reached so far (0.0 - 100.0).
    ///
    /// A run can finish below 100% when the member list is exhausted first.
    ///
    /// ```rust
    /// use chatroster::progress::PageProgress;
    ///
    /// assert_eq!(PageProgress::new(1, 50, 200).percentage(), 25.0);
    /// ```
    pub fn percentage(&self) -> f64 {
        if self.result_cap == 0 {
            100.0
        } else {
            (self.entries_fetched as f64 / self.result_cap as f64) * 100.0
        }
    }

    /// Returns whether the cap has been reached.
    pub fn is_complete(&self) -> bool {
        self.entries_fetched >= self.result_cap
    }

    /// Returns how many more entries the run may accumulate.
    pub fn remaining(&self) -> usize {
        self.result_cap.saturating_sub(self.entries_fetched)
    }
}

/// Thread-safe callback that receives [`PageProgress`] updates.
pub type ProgressCallback = Arc<dyn Fn(PageProgress) + Send + Sync>;

/// Creates a no-op progress callback.
pub fn no_progress() -> ProgressCallback {
    Arc::new(|_| {})
}

/// Creates a progress callback that prints to stderr.
///
/// ```rust
/// use chatroster::progress::{stderr_progress, PageProgress};
///
/// let callback = stderr_progress();
/// // Prints "   page 2: 200/300 entries (66.7%)" to stderr
/// callback(PageProgress::new(2, 200, 300));
/// ```
pub fn stderr_progress() -> ProgressCallback {
    Arc::new(|progress| {
        eprintln!(
            "   page {}: {}/{} entries ({:.1}%)",
            progress.pages_fetched,
            progress.entries_fetched,
            progress.result_cap,
            progress.percentage()
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(PageProgress::new(1, 150, 300).percentage(), 50.0);
        assert_eq!(PageProgress::new(0, 0, 0).percentage(), 100.0);
    }

    #[test]
    fn test_is_complete_and_remaining() {
        let done = PageProgress::new(3, 300, 300);
        assert!(done.is_complete());
        assert_eq!(done.remaining(), 0);

        let partial = PageProgress::new(1, 120, 300);
        assert!(!partial.is_complete());
        assert_eq!(partial.remaining(), 180);
    }

    #[test]
    fn test_no_progress_callback() {
        let callback = no_progress();
        callback(PageProgress::default()); // Should not panic
    }

    #[test]
    fn test_progress_callback_type() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let counter = Arc::new(AtomicUsize::new(0));
        let counter_clone = counter.clone();

        let callback: ProgressCallback = Arc::new(move |progress| {
            counter_clone.store(progress.entries_fetched, Ordering::SeqCst);
        });

        callback(PageProgress::new(1, 42, 100));
        assert_eq!(counter.load(Ordering::SeqCst), 42);
    }
}
