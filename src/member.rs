//! Normalized member record.
//!
//! This module provides [`MemberRecord`], the snapshot of one chat member taken
//! at collection time. Listing clients return loosely-typed
//! [`RawEntry`](crate::client::RawEntry) values; the collector normalizes them
//! into this structure before they enter a [`RecordStore`](crate::store::RecordStore).
//!
//! # Examples
//!
//! ```
//! use chatroster::MemberRecord;
//!
//! let member = MemberRecord::new(42)
//!     .with_username("alice")
//!     .with_first_name("Alice")
//!     .with_bot(false);
//!
//! assert_eq!(member.id(), 42);
//! assert_eq!(member.username(), Some("alice"));
//! assert!(!member.is_bot());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A normalized snapshot of a single chat member.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `id` | `i64` | Platform user id, the identity key |
/// | `username` | `Option<String>` | Public handle without the `@` |
/// | `first_name` | `Option<String>` | First display name part |
/// | `last_name` | `Option<String>` | Last display name part |
/// | `phone` | `Option<String>` | Contact number, when visible to the caller |
/// | `is_bot` | `bool` | Automated account flag |
/// | `is_premium` | `bool` | Privileged (premium) account flag |
/// | `joined_at` | `Option<DateTime<Utc>>` | Join time, not returned by the listing API |
///
/// Two records are the same member when their `id` matches. A store keeps at
/// most one record per id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Platform user id.
    pub id: i64,

    /// Public handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub username: Option<String>,

    /// First name as shown in the member list.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name as shown in the member list.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub last_name: Option<String>,

    /// Phone number, only present when the member shares it with the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub phone: Option<String>,

    /// Whether the account is a bot.
    #[serde(default)]
    pub is_bot: bool,

    /// Whether the account has a premium subscription.
    #[serde(default)]
    pub is_premium: bool,

    /// When the member joined the chat.
    ///
    /// The participant listing does not carry join dates, so collection leaves
    /// this empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
}

impl MemberRecord {
    /// Creates a record with only an id. Every other field is empty or `false`.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
            last_name: None,
            phone: None,
            is_bot: false,
            is_premium: false,
            joined_at: None,
        }
    }

    // =========================================================================
    // Builder methods
    // =========================================================================

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn with_bot(mut self, is_bot: bool) -> Self {
        self.is_bot = is_bot;
        self
    }

    #[must_use]
    pub fn with_premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }

    #[must_use]
    pub fn with_joined_at(mut self, ts: DateTime<Utc>) -> Self {
        self.joined_at = Some(ts);
        self
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the member id.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the handle, if set.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the first name, if set.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Returns the last name, if set.
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Returns the phone number, if set.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    /// Returns the join time, if known.
    pub fn joined_at(&self) -> Option<DateTime<Utc>> {
        self.joined_at
    }

    // =========================================================================
    // Utility methods
    // =========================================================================

    /// Returns a human-readable name: first and last name joined by a space,
    /// falling back to `@username`, then to the numeric id.
    ///
    /// ```
    /// use chatroster::MemberRecord;
    ///
    /// let m = MemberRecord::new(7).with_first_name("Іван").with_last_name("Петренко");
    /// assert_eq!(m.display_name(), "Іван Петренко");
    ///
    /// let m = MemberRecord::new(8).with_username("bob");
    /// assert_eq!(m.display_name(), "@bob");
    ///
    /// assert_eq!(MemberRecord::new(9).display_name(), "9");
    /// ```
    pub fn display_name(&self) -> String {
        let name = [self.first_name(), self.last_name()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            return name;
        }

        match self.username() {
            Some(handle) if !handle.is_empty() => format!("@{}", handle),
            _ => self.id.to_string(),
        }
    }
}
