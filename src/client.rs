//! Listing client abstraction.
//!
//! The collector never talks to a chat service directly. It asks a
//! [`ListingClient`] for one page of participants at a time and reacts to the
//! tagged [`PageResult`]:
//!
//! - [`PageResult::Entries`] - a (possibly empty) batch of raw entries
//! - [`PageResult::Denied`] - the caller may not enumerate this chat
//!
//! Any other failure is returned through the `Err` channel as
//! [`ChatrosterError::Transport`](crate::ChatrosterError::Transport) (or any
//! other variant the client finds fitting) and aborts the run.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use chatroster::client::{ListingClient, PageRequest, PageResult, RawEntry};
//! use chatroster::Result;
//!
//! struct Fixed(Vec<RawEntry>);
//!
//! #[async_trait]
//! impl ListingClient for Fixed {
//!     async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
//!         let page = self.0.iter().skip(request.offset).take(request.limit).cloned().collect();
//!         Ok(PageResult::Entries(page))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parameters of a single page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Chat, group, or channel whose members are listed.
    pub resource_id: i64,
    /// Search filter; empty matches every member.
    pub search: String,
    /// Number of entries already consumed.
    pub offset: usize,
    /// Maximum number of entries to return.
    pub limit: usize,
}

impl PageRequest {
    pub fn new(resource_id: i64, search: impl Into<String>, offset: usize, limit: usize) -> Self {
        Self {
            resource_id,
            search: search.into(),
            offset,
            limit,
        }
    }
}

/// Outcome of a page request that reached the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// Entries starting at the requested offset. Empty when the list is exhausted.
    Entries(Vec<RawEntry>),
    /// The caller lacks the privilege needed to list members of this chat.
    Denied,
}

impl PageResult {
    /// Returns `true` for [`PageResult::Denied`].
    pub fn is_denied(&self) -> bool {
        matches!(self, PageResult::Denied)
    }
}

/// Kind of a listed entry.
///
/// Member listings may also contain channel or chat objects. Only
/// [`EntryKind::User`] entries become member records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// An individual account (human or bot)
    #[default]
    User,
    /// A channel acting as a participant
    Channel,
    /// A basic group acting as a participant
    Chat,
    /// Anything the client does not recognize
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::User => write!(f, "user"),
            EntryKind::Channel => write!(f, "channel"),
            EntryKind::Chat => write!(f, "chat"),
            EntryKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Raw participant entry as returned by the listing service.
///
/// Everything except `id` is optional; missing fields never fail a run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawEntry {
    /// Entity id
    pub id: i64,
    /// Entity kind (defaults to `user`)
    #[serde(default)]
    pub kind: EntryKind,
    /// Public handle
    #[serde(default)]
    pub username: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Bot flag
    #[serde(default)]
    pub bot: Option<bool>,
    /// Premium flag
    #[serde(default)]
    pub premium: Option<bool>,
}

impl RawEntry {
    /// Creates a bare user entry.
    pub fn user(id: i64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Creates a bare entry of the given kind.
    pub fn of_kind(id: i64, kind: EntryKind) -> Self {
        Self {
            id,
            kind,
            ..Self::default()
        }
    }
}

/// Capability to fetch one page of a chat's member list.
///
/// Implementations own transport, authentication and any rate limiting of
/// concurrent calls. The collector calls `fetch_page` strictly sequentially.
#[async_trait]
pub trait ListingClient: Send + Sync {
    /// Fetches up to `request.limit` entries starting at `request.offset`.
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult>;
}

#[async_trait]
impl<T: ListingClient + ?Sized> ListingClient for &T {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        (**self).fetch_page(request).await
    }
}

#[async_trait]
impl<T: ListingClient + ?Sized> ListingClient for Box<T> {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        (**self).fetch_page(request).await
    }
}
