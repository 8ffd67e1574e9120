//! Conversion from raw listing entries to [`MemberRecord`]s.
//!
//! Listings mix individual accounts with channel and chat objects, and most
//! fields on an account are optional. This module keeps only person-shaped
//! entries and fills defaults for anything missing, so a sparse entry never
//! aborts a collection run.

use crate::client::{EntryKind, RawEntry};
use crate::member::MemberRecord;

/// Returns `true` if the entry describes an individual account.
pub fn is_member_entry(entry: &RawEntry) -> bool {
    entry.kind == EntryKind::User
}

/// Normalizes an account entry into a [`MemberRecord`].
///
/// - `id`, handle and names are copied as-is
/// - a missing phone stays `None`
/// - missing bot / premium flags become `false`
/// - `joined_at` is left empty, the listing does not carry it
pub fn to_member(entry: &RawEntry) -> MemberRecord {
    MemberRecord {
        id: entry.id,
        username: entry.username.clone(),
        first_name: entry.first_name.clone(),
        last_name: entry.last_name.clone(),
        phone: entry.phone.clone(),
        is_bot: entry.bot.unwrap_or(false),
        is_premium: entry.premium.unwrap_or(false),
        joined_at: None,
    }
}

/// Normalizes an entry if it is an individual member.
///
/// Returns `None` for channel, chat and unrecognized entries.
pub fn extract_member(entry: &RawEntry) -> Option<MemberRecord> {
    is_member_entry(entry).then(|| to_member(entry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_sparse_entry() {
        let member = to_member(&RawEntry::user(42));
        assert_eq!(member.id(), 42);
        assert!(member.phone().is_none());
        assert!(!member.is_bot());
        assert!(!member.is_premium());
        assert!(member.joined_at().is_none());
    }

    #[test]
    fn test_fields_are_copied() {
        let entry = RawEntry {
            id: 9,
            kind: EntryKind::User,
            username: Some("sasha".into()),
            first_name: Some("Олександра".into()),
            last_name: Some("Коваль".into()),
            phone: Some("380671234567".into()),
            bot: Some(true),
            premium: Some(true),
        };

        let member = to_member(&entry);
        assert_eq!(member.username(), Some("sasha"));
        assert_eq!(member.first_name(), Some("Олександра"));
        assert_eq!(member.last_name(), Some("Коваль"));
        assert_eq!(member.phone(), Some("380671234567"));
        assert!(member.is_bot());
        assert!(member.is_premium());
    }

    #[test]
    fn test_explicit_false_flags() {
        let entry = RawEntry {
            bot: Some(false),
            premium: Some(false),
            ..RawEntry::user(1)
        };
        let member = to_member(&entry);
        assert!(!member.is_bot());
        assert!(!member.is_premium());
    }

    #[test]
    fn test_non_user_entries_are_skipped() {
        assert!(extract_member(&RawEntry::of_kind(1, EntryKind::Channel)).is_none());
        assert!(extract_member(&RawEntry::of_kind(2, EntryKind::Chat)).is_none());
        assert!(extract_member(&RawEntry::of_kind(3, EntryKind::Unknown)).is_none());
        assert!(extract_member(&RawEntry::user(4)).is_some());
    }

    #[test]
    fn test_bots_are_members() {
        let entry = RawEntry {
            bot: Some(true),
            ..RawEntry::user(77)
        };
        let member = extract_member(&entry).unwrap();
        assert!(member.is_bot());
    }
}
