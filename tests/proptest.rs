//! Property-based tests for chatroster.
//!
//! These tests generate random page layouts and entry streams to find edge
//! cases in pagination and deduplication.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use proptest::prelude::*;

use chatroster::client::{EntryKind, ListingClient, PageRequest, PageResult, RawEntry};
use chatroster::collector::Collector;
use chatroster::config::CollectorConfig;
use chatroster::{MemberRecord, RecordStore, Result};

/// Serves `total` user entries, never more than `max_page` per request.
struct ClampedSource {
    entries: Vec<RawEntry>,
    max_page: usize,
    offsets: Mutex<Vec<usize>>,
}

impl ClampedSource {
    fn new(entries: Vec<RawEntry>, max_page: usize) -> Self {
        Self {
            entries,
            max_page,
            offsets: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ListingClient for ClampedSource {
    async fn fetch_page(&self, request: &PageRequest) -> Result<PageResult> {
        self.offsets.lock().unwrap().push(request.offset);
        let page = self
            .entries
            .iter()
            .skip(request.offset)
            .take(request.limit.min(self.max_page))
            .cloned()
            .collect();
        Ok(PageResult::Entries(page))
    }
}

fn collect(source: &ClampedSource, page_size: usize, cap: usize) -> Vec<MemberRecord> {
    collect_counting(source, page_size, cap).0
}

/// Runs a collection and also returns the raw entry count from the last
/// progress report.
fn collect_counting(source: &ClampedSource, page_size: usize, cap: usize) -> (Vec<MemberRecord>, usize) {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let config = CollectorConfig::new()
        .with_page_delay(Duration::ZERO)
        .with_page_size(page_size);
    let fetched = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&fetched);
    let mut collector = Collector::with_config(source, config)
        .with_progress(Arc::new(move |p| sink.store(p.entries_fetched, Ordering::SeqCst)));
    let members = runtime.block_on(collector.collect(-1, cap)).unwrap();
    (members, fetched.load(Ordering::SeqCst))
}

/// Entries with ids from a small range so repeats are common.
fn arb_entry() -> impl Strategy<Value = RawEntry> {
    (
        1i64..30,
        prop::sample::select(vec![EntryKind::User, EntryKind::User, EntryKind::Channel]),
        prop::option::of(prop::sample::select(vec![
            "alice".to_string(),
            "bob".to_string(),
            "олена".to_string(),
            "zoë".to_string(),
        ])),
    )
        .prop_map(|(id, kind, username)| RawEntry {
            username,
            ..RawEntry::of_kind(id, kind)
        })
}

fn arb_entries(max_len: usize) -> impl Strategy<Value = Vec<RawEntry>> {
    prop::collection::vec(arb_entry(), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PAGINATION PROPERTIES
    // ============================================

    /// Accumulated raw entries never exceed the cap, whatever the page layout
    #[test]
    fn raw_entries_never_exceed_cap(
        entries in arb_entries(60),
        max_page in 1usize..15,
        page_size in 0usize..20,
        cap in 1usize..50,
    ) {
        let available = entries.len();
        let source = ClampedSource::new(entries, max_page);
        let (members, fetched) = collect_counting(&source, page_size, cap);

        prop_assert!(fetched <= cap);
        prop_assert_eq!(fetched, available.min(cap));
        prop_assert!(members.len() <= fetched);
    }

    /// Offsets advance by exactly the number of entries already received
    #[test]
    fn offsets_are_contiguous(
        total in 0i64..80,
        max_page in 1usize..15,
        cap in 1usize..100,
    ) {
        let entries: Vec<RawEntry> = (1..=total).map(RawEntry::user).collect();
        let source = ClampedSource::new(entries, max_page);
        collect(&source, 0, cap);

        let offsets = source.offsets.lock().unwrap().clone();
        prop_assert_eq!(offsets[0], 0);
        for pair in offsets.windows(2) {
            let step = pair[1] - pair[0];
            prop_assert!(step > 0 && step <= max_page);
        }
    }

    /// With distinct user ids the whole listing is collected up to the cap
    #[test]
    fn distinct_users_fill_up_to_cap(
        total in 0i64..80,
        max_page in 1usize..15,
        cap in 1usize..100,
    ) {
        let entries: Vec<RawEntry> = (1..=total).map(RawEntry::user).collect();
        let source = ClampedSource::new(entries, max_page);
        let members = collect(&source, 0, cap);

        let expected = (total as usize).min(cap);
        prop_assert_eq!(members.len(), expected);
        let ids: Vec<i64> = members.iter().map(MemberRecord::id).collect();
        prop_assert_eq!(ids, (1..=expected as i64).collect::<Vec<_>>());
    }

    // ============================================
    // STORE PROPERTIES
    // ============================================

    /// Collected ids are unique and never include non-user entries
    #[test]
    fn collected_ids_are_unique_users(entries in arb_entries(60), max_page in 1usize..15) {
        let user_ids: HashSet<i64> = entries
            .iter()
            .filter(|e| e.kind == EntryKind::User)
            .map(|e| e.id)
            .collect();
        let source = ClampedSource::new(entries, max_page);
        let members = collect(&source, 0, 300);

        let ids: Vec<i64> = members.iter().map(MemberRecord::id).collect();
        let unique: HashSet<i64> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert_eq!(unique, user_ids);
    }

    /// Store keeps first-insertion order and last-write-wins values
    #[test]
    fn store_upsert_semantics(ops in prop::collection::vec((1i64..20, 0u8..4), 0..50)) {
        let mut store = RecordStore::new();
        let mut first_seen = Vec::new();
        let mut latest = HashMap::new();

        for (id, tag) in &ops {
            let record = MemberRecord::new(*id).with_username(format!("v{tag}"));
            if !latest.contains_key(id) {
                first_seen.push(*id);
            }
            latest.insert(*id, record.clone());
            store.insert(record);
        }

        prop_assert_eq!(store.len(), first_seen.len());
        let order: Vec<i64> = store.iter().map(MemberRecord::id).collect();
        prop_assert_eq!(order, first_seen);
        for (id, record) in &latest {
            prop_assert_eq!(store.get(*id), Some(record));
        }
    }
}
