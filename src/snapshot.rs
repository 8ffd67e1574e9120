//! Listing client backed by a JSON snapshot.
//!
//! A snapshot is a recorded dump of one or more chats and their participant
//! listings. [`SnapshotClient`] serves it through the [`ListingClient`] trait
//! exactly like a live service would: offset/limit paging, search filtering,
//! per-chat access denial and an optional server-side page size ceiling.
//!
//! # Format
//!
//! ```json
//! {
//!   "chats": [
//!     {
//!       "id": -1001234567890,
//!       "title": "Rustaceans",
//!       "access_denied": false,
//!       "participants": [
//!         {"id": 1, "kind": "user", "username": "alice", "first_name": "Alice", "premium": true},
//!         {"id": 2, "kind": "channel", "first_name": "News"}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use chatroster::snapshot::SnapshotClient;
//!
//! let json = r#"{"chats": [{"id": 7, "title": "Team", "participants": [{"id": 1}]}]}"#;
//! let client = SnapshotClient::from_str(json)?;
//!
//! let chats = client.chats();
//! assert_eq!(chats[0].title, "Team");
//! assert_eq!(chats[0].participants, 1);
//! # Ok::<(), chatroster::ChatrosterError>(())
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::{ListingClient, PageRequest, PageResult, RawEntry};
use crate::error::{ChatrosterError, Result};

/// Root of a snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub chats: Vec<SnapshotChat>,
}

/// One chat inside a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotChat {
    /// Chat id
    pub id: i64,
    /// Chat title
    #[serde(default)]
    pub title: String,
    /// Whether listing members requires rights the recorder did not have
    #[serde(default)]
    pub access_denied: bool,
    /// Participant listing in service order
    #[serde(default)]
    pub participants: Vec<RawEntry>,
}

/// Short description of a chat, as shown in chat pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSummary {
    pub id: i64,
    pub title: String,
    pub participants: usize,
    pub access_denied: bool,
}

/// [`ListingClient`] serving pages from an in-memory [`Snapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotClient {
    snapshot: Snapshot,
    max_page_size: Option<usize>,
}

impl SnapshotClient {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            max_page_size: None,
        }
    }

    /// Loads a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let client = Self::from_str(&content)?;
        debug!(
            path = %path.as_ref().display(),
            chats = client.snapshot.chats.len(),
            "snapshot loaded"
        );
        Ok(client)
    }

    /// Parses a snapshot from a JSON string.
    ///
    /// Chat ids must be unique within the document.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(content)?;

        let mut seen = HashSet::with_capacity(snapshot.chats.len());
        if let Some(dup) = snapshot.chats.iter().find(|chat| !seen.insert(chat.id)) {
            return Err(ChatrosterError::invalid_format(
                "snapshot",
                format!("duplicate chat id {}", dup.id),
            ));
        }

        Ok(Self::new(snapshot))
    }

    /// Caps every page at `size` entries regardless of the requested limit,
    /// like services that silently clamp large requests.
    #[must_use]
    pub fn with_max_page_size(mut self, size: usize) -> Self {
        self.max_page_size = (size > 0).then_some(size);
        self
    }

    /// Lists the chats in the snapshot, in file order.
    pub fn chats(&self) -> Vec<ChatSummary> {
        self.snapshot
            .chats
            .iter()
            .map(|chat| ChatSummary {
                id: chat.id,
                title: chat.title.clone(),
                participants: chat.participants.len(),
                access_denied: chat.access_denied,
            })
            .collect()
    }

    fn chat(&self, id: i64) -> Option<&SnapshotChat> {
        self.snapshot.chats.iter().find(|chat| chat.id == id)
    }
}

#[async_trait]
impl ListingClient for SnapshotClient {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        let chat = self
            .chat(request.resource_id)
            .ok_or_else(|| ChatrosterError::unknown_chat(request.resource_id))?;

        if chat.access_denied {
            return Ok(PageResult::Denied);
        }

        let limit = match self.max_page_size {
            Some(max) => request.limit.min(max),
            None => request.limit,
        };

        let page = chat
            .participants
            .iter()
            .filter(|entry| matches_search(entry, &request.search))
            .skip(request.offset)
            .take(limit)
            .cloned()
            .collect();

        Ok(PageResult::Entries(page))
    }
}

/// Case-insensitive substring match on handle and names. Empty matches all.
fn matches_search(entry: &RawEntry, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    [&entry.username, &entry.first_name, &entry.last_name]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
}
