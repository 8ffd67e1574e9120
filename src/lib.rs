//! # Chatroster
//!
//! A Rust library for collecting the member list of a chat, group or channel
//! through a paginated listing API and exporting it to CSV.
//!
//! ## Overview
//!
//! Member listings are served page by page by a rate-limited service.
//! Chatroster provides:
//! - a [`ListingClient`](client::ListingClient) trait for the service side
//! - a bounded [`Collector`](collector::Collector) that pages through the
//!   listing, honors a result cap, and stops on access denial
//! - a deduplicating [`RecordStore`] of normalized [`MemberRecord`]s
//! - a CSV [`export`](export::export) with a fixed 8-column header
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "snapshot", feature = "csv-output"))]
//! # async fn example() -> chatroster::Result<()> {
//! use chatroster::prelude::*;
//!
//! let client = SnapshotClient::load("members.json")?;
//! let mut collector = Collector::new(client);
//!
//! let members = collector.collect(-1001234567890, 300).await?;
//! println!("{} members", members.len());
//!
//! let path = export(collector.store(), "csv", None)?;
//! println!("saved to {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`client`] — [`ListingClient`](client::ListingClient), page requests and raw entries
//! - [`collector`] — the paginated collection loop
//! - [`store`] — [`RecordStore`]
//! - [`member`] — [`MemberRecord`]
//! - [`normalize`] — entry-kind filter and field defaults
//! - [`config`] — [`CollectorConfig`](config::CollectorConfig)
//! - [`progress`] — per-page progress callbacks
//! - [`format`] — export format selection and default file names
//! - [`export`] — CSV writer (`csv-output` feature)
//! - [`snapshot`] — JSON snapshot listing client (`snapshot` feature)
//! - [`cli`] — CLI arguments (`cli` feature)
//! - [`error`] — Unified error types ([`ChatrosterError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod collector;
pub mod config;
pub mod error;
#[cfg(feature = "csv-output")]
pub mod export;
pub mod format;
pub mod member;
pub mod normalize;
pub mod progress;
#[cfg(feature = "snapshot")]
pub mod snapshot;
pub mod store;

// Re-export the main types at the crate root for convenience
pub use error::{ChatrosterError, Result};
pub use member::MemberRecord;
pub use store::RecordStore;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatroster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MemberRecord, RecordStore};

    // Error types
    pub use crate::error::{ChatrosterError, Result};

    // Listing side
    pub use crate::client::{EntryKind, ListingClient, PageRequest, PageResult, RawEntry};

    // Collection
    pub use crate::collector::Collector;
    pub use crate::config::CollectorConfig;
    pub use crate::progress::{PageProgress, ProgressCallback};

    // Export
    #[cfg(feature = "csv-output")]
    pub use crate::export::{export, export_to, to_csv, write_csv};
    pub use crate::format::ExportFormat;

    #[cfg(feature = "snapshot")]
    pub use crate::snapshot::SnapshotClient;
}
