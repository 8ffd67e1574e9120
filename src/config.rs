//! Configuration types for collection runs.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use chatroster::config::CollectorConfig;
//!
//! let config = CollectorConfig::new()
//!     .with_page_size(200)
//!     .with_page_delay(Duration::from_millis(500))
//!     .with_search("ivan");
//!
//! assert_eq!(config.effective_page_size(1000), 200);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default number of raw entries requested by the CLI.
pub const DEFAULT_RESULT_CAP: usize = 300;

/// Default pause between consecutive page requests, in milliseconds.
pub const DEFAULT_PAGE_DELAY_MS: u64 = 1000;

/// Configuration for the paginated collector.
///
/// By default the page size equals the result cap passed to
/// [`Collector::collect`](crate::collector::Collector::collect), so a bounded
/// run usually completes in a single request. Set `page_size` to split large
/// runs into smaller requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Entries per request; `None` uses the result cap (default: None)
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Pause between page requests in milliseconds (default: 1000)
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,

    /// Search filter sent with every request; empty matches all (default: "")
    #[serde(default)]
    pub search: String,
}

fn default_page_delay_ms() -> u64 {
    DEFAULT_PAGE_DELAY_MS
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            page_size: None,
            page_delay_ms: DEFAULT_PAGE_DELAY_MS,
            search: String::new(),
        }
    }
}

impl CollectorConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a page size independent from the result cap.
    ///
    /// A size of zero is ignored and the cap is used instead.
    #[must_use]
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = (size > 0).then_some(size);
        self
    }

    /// Sets the pause between page requests.
    #[must_use]
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Sets the search filter.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Returns the pause between page requests.
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    /// Returns the page size used for a run bounded by `result_cap`.
    ///
    /// A zero `page_size` (possible through deserialization) falls back to
    /// the cap, so a request never asks for zero entries.
    pub fn effective_page_size(&self, result_cap: usize) -> usize {
        self.page_size.filter(|&n| n > 0).unwrap_or(result_cap)
    }
}
