//! Bounded, paginated member collection.
//!
//! [`Collector`] drives a [`ListingClient`] page by page until one of three
//! things happens:
//!
//! 1. the service returns an empty page (the member list is exhausted),
//! 2. the number of accumulated raw entries reaches the result cap,
//! 3. the service reports that the caller may not list this chat.
//!
//! Pages are requested strictly one after another with a fixed pause in
//! between. The offset sent with each request is the number of entries
//! received so far, not a page number, so it stays correct when the service
//! returns shorter pages than requested.
//!
//! After paging stops, individual-member entries are normalized and inserted
//! into a fresh [`RecordStore`]; repeated ids keep the last entry seen.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "snapshot")]
//! # async fn example() -> chatroster::Result<()> {
//! use chatroster::collector::Collector;
//! use chatroster::snapshot::SnapshotClient;
//!
//! let client = SnapshotClient::load("members.json")?;
//! let mut collector = Collector::new(client);
//!
//! let members = collector.collect(-1001234567890, 300).await?;
//! println!("collected {} members", members.len());
//! # Ok(())
//! # }
//! ```

use tracing::{debug, error, info, warn};

use crate::client::{ListingClient, PageRequest, PageResult, RawEntry};
use crate::config::CollectorConfig;
use crate::error::{ChatrosterError, Result};
use crate::member::MemberRecord;
use crate::normalize::extract_member;
use crate::progress::{PageProgress, ProgressCallback};
use crate::store::RecordStore;

/// Paginating member collector bound to one listing client.
///
/// Each call to [`collect`](Self::collect) starts from an empty
/// [`RecordStore`], which stays available through [`store`](Self::store)
/// until the next run.
pub struct Collector<C> {
    client: C,
    config: CollectorConfig,
    store: RecordStore,
    progress: Option<ProgressCallback>,
}

impl<C: ListingClient> Collector<C> {
    /// Creates a collector with default configuration.
    pub fn new(client: C) -> Self {
        Self::with_config(client, CollectorConfig::default())
    }

    /// Creates a collector with custom configuration.
    pub fn with_config(client: C, config: CollectorConfig) -> Self {
        Self {
            client,
            config,
            store: RecordStore::new(),
            progress: None,
        }
    }

    /// Registers a callback invoked after every non-empty page.
    #[must_use]
    pub fn with_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress = Some(callback);
        self
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Returns the records of the most recent run.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Consumes the collector, returning the records of the most recent run.
    pub fn into_store(self) -> RecordStore {
        self.store
    }

    /// Collects the members of `resource_id`, retrieving at most `result_cap`
    /// raw entries.
    ///
    /// Returns an empty list, without error, when the service denies access.
    /// Transport failures are logged and returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`ChatrosterError::InvalidLimit`] if `result_cap` is zero
    /// - whatever the client returns from a failed page request
    pub async fn collect(&mut self, resource_id: i64, result_cap: usize) -> Result<Vec<MemberRecord>> {
        if result_cap == 0 {
            return Err(ChatrosterError::invalid_limit(result_cap));
        }

        self.store = RecordStore::new();
        info!(resource_id, result_cap, "collecting chat members");

        let Some(entries) = self.fetch_entries(resource_id, result_cap).await? else {
            return Ok(Vec::new());
        };

        self.store.extend(entries.iter().filter_map(extract_member));

        info!(
            resource_id,
            entries = entries.len(),
            members = self.store.len(),
            "collection finished"
        );
        Ok(self.store.all())
    }

    /// Runs the paging loop. `None` means access was denied.
    async fn fetch_entries(&self, resource_id: i64, result_cap: usize) -> Result<Option<Vec<RawEntry>>> {
        let page_size = self.config.effective_page_size(result_cap);
        let delay = self.config.page_delay();
        let mut entries: Vec<RawEntry> = Vec::new();
        let mut pages = 0;

        loop {
            let offset = entries.len();
            let request = PageRequest::new(resource_id, self.config.search.as_str(), offset, page_size);

            let page = match self.client.fetch_page(&request).await {
                Ok(PageResult::Entries(page)) => page,
                Ok(PageResult::Denied) => {
                    warn!(
                        resource_id,
                        "admin rights are required to list members of this chat, skipping"
                    );
                    return Ok(None);
                }
                Err(err) => {
                    error!(resource_id, offset, error = %err, "failed to fetch members page");
                    return Err(err);
                }
            };

            if page.is_empty() {
                debug!(resource_id, offset, "member list exhausted");
                break;
            }

            pages += 1;
            let room = result_cap - offset;
            if page.len() > room {
                debug!(resource_id, returned = page.len(), kept = room, "page exceeds result cap, truncating");
            }
            entries.extend(page.into_iter().take(room));
            debug!(resource_id, page = pages, offset = entries.len(), "fetched members page");

            if let Some(callback) = &self.progress {
                callback(PageProgress::new(pages, entries.len(), result_cap));
            }

            if entries.len() >= result_cap {
                debug!(resource_id, result_cap, "result cap reached");
                break;
            }

            tokio::time::sleep(delay).await;
        }

        Ok(Some(entries))
    }
}
