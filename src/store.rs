//! In-memory member store keyed by member id.

use std::collections::HashMap;

use crate::member::MemberRecord;

/// Deduplicating collection of [`MemberRecord`]s.
///
/// Inserting a record whose id is already present replaces the stored record
/// wholesale but keeps its original position, so iteration order is the order
/// in which each id was first seen.
///
/// # Example
///
/// ```rust
/// use chatroster::{MemberRecord, RecordStore};
///
/// let mut store = RecordStore::new();
/// store.insert(MemberRecord::new(1).with_username("old"));
/// store.insert(MemberRecord::new(2));
/// store.insert(MemberRecord::new(1).with_username("new"));
///
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.get(1).and_then(|m| m.username()), Some("new"));
/// assert_eq!(store.all()[0].id(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<MemberRecord>,
    index: HashMap<i64, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the record with the same id.
    pub fn insert(&mut self, record: MemberRecord) {
        match self.index.get(&record.id) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(record.id, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Returns the record stored under `id`.
    pub fn get(&self, id: i64) -> Option<&MemberRecord> {
        self.index.get(&id).map(|&slot| &self.records[slot])
    }

    /// Returns a copy of every stored record in first-insertion order.
    pub fn all(&self) -> Vec<MemberRecord> {
        self.records.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MemberRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a MemberRecord;
    type IntoIter = std::slice::Iter<'a, MemberRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<MemberRecord> for RecordStore {
    fn extend<I: IntoIterator<Item = MemberRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

impl FromIterator<MemberRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = MemberRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
