//! Synthetic snapshot generator for stress testing chatroster.
//!
//! Usage: cargo run --features gen-snapshot --bin gen_snapshot -- [members] [output]
//! Example: cargo run --features gen-snapshot --bin gen_snapshot -- 100000 big_chat.json

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

use rand::Rng;
use rand::seq::SliceRandom;

use chatroster::client::{EntryKind, RawEntry};
use chatroster::snapshot::{Snapshot, SnapshotChat};

const FIRST_NAMES: &[&str] = &[
    "Alice",
    "Bob",
    "Іван",
    "Марія",
    "Олена",
    "村上",
    "محمد",
    "Zoë",
    "O'Brien",
    "Name, With Comma",
    "Name \"Quoted\"",
    "🔥Fire🔥",
    "",
    "   ",
];

const LAST_NAMES: &[&str] = &["Smith", "Коваленко", "Шевченко", "田中", "Müller", "Line\nBreak"];

const GENERATED_CHAT_ID: i64 = -1000000000001;
const DENIED_CHAT_ID: i64 = -1000000000002;

fn main() {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let output = args.get(2).map(|s| s.as_str()).unwrap_or("big_chat.json");

    println!("🧪 Snapshot Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Members: {}", count);
    println!("   Output:  {}", output);
    println!();

    let start = std::time::Instant::now();
    let mut rng = rand::thread_rng();

    let participants: Vec<RawEntry> = (0..count).map(|i| generate_entry(&mut rng, i)).collect();

    let snapshot = Snapshot {
        chats: vec![
            SnapshotChat {
                id: GENERATED_CHAT_ID,
                title: format!("Generated chat ({} entries)", count),
                access_denied: false,
                participants,
            },
            SnapshotChat {
                id: DENIED_CHAT_ID,
                title: "Admins only".to_string(),
                access_denied: true,
                participants: Vec::new(),
            },
        ],
    };

    let file = File::create(output).expect("Failed to create output file");
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer
    serde_json::to_writer_pretty(&mut writer, &snapshot).expect("Failed to write snapshot");
    writer.flush().expect("Failed to flush output");

    let elapsed = start.elapsed();
    println!("✅ Done!");
    println!("   Chat id: {}", GENERATED_CHAT_ID);
    println!("   Time:    {:.2}s", elapsed.as_secs_f64());
}

/// Most entries are plain users; every 50th is a channel, every 97th repeats
/// an earlier id, and optional fields are dropped at random.
fn generate_entry(rng: &mut impl Rng, index: usize) -> RawEntry {
    let id = if index % 97 == 96 {
        rng.gen_range(1..=index as i64)
    } else {
        index as i64 + 1
    };

    if index % 50 == 49 {
        return RawEntry {
            first_name: Some(format!("Channel #{}", index)),
            ..RawEntry::of_kind(id, EntryKind::Channel)
        };
    }

    RawEntry {
        id,
        kind: EntryKind::User,
        username: rng.gen_bool(0.7).then(|| format!("user_{}", index)),
        first_name: FIRST_NAMES.choose(rng).map(|s| (*s).to_string()),
        last_name: rng
            .gen_bool(0.5)
            .then(|| LAST_NAMES.choose(rng).map(|s| (*s).to_string()))
            .flatten(),
        phone: rng
            .gen_bool(0.1)
            .then(|| format!("380{:09}", rng.gen_range(0..1_000_000_000u64))),
        bot: rng.gen_bool(0.8).then(|| rng.gen_bool(0.05)),
        premium: rng.gen_bool(0.8).then(|| rng.gen_bool(0.2)),
    }
}
