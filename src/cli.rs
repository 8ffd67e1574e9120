//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `chatroster`
//! binary, and its conversion into a library [`CollectorConfig`].
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use chatroster::cli::Args;
//!
//! let args = Args::parse_from(["chatroster", "members.json", "--chat", "-1001", "--limit", "50"]);
//! assert_eq!(args.chat, Some(-1001));
//! assert_eq!(args.limit, 50);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{CollectorConfig, DEFAULT_PAGE_DELAY_MS, DEFAULT_RESULT_CAP};
use crate::format::ExportFormat;

/// Collect the member list of a chat or channel and export it to CSV.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatroster")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatroster members.json --list
    chatroster members.json --chat -1001234567890
    chatroster members.json -c -1001234567890 --limit 1000 --page-size 200
    chatroster members.json -c 42 --search ivan -o ivans.csv
    RUST_LOG=debug chatroster members.json -c 42 --delay-ms 0")]
pub struct Args {
    /// Path to a JSON snapshot of chat member listings
    pub input: PathBuf,

    /// List chats in the snapshot and exit
    #[arg(long)]
    pub list: bool,

    /// Id of the chat to collect members from
    #[arg(short, long, value_name = "ID", allow_negative_numbers = true)]
    pub chat: Option<i64>,

    /// Maximum number of entries to retrieve
    #[arg(short, long, default_value_t = DEFAULT_RESULT_CAP as u32, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: u32,

    /// Entries per request (defaults to --limit)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Largest page the listing source returns, regardless of the request
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_page: Option<u32>,

    /// Pause between page requests in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_PAGE_DELAY_MS)]
    pub delay_ms: u64,

    /// Only list members whose handle or name contains this text
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Path to output file (defaults to chat_participants_<timestamp>.<format>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (case-insensitive)
    #[arg(short, long, default_value = "csv")]
    pub format: ExportFormat,

    /// Number of collected members to print after export
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub preview: usize,

    /// Report progress after every page
    #[arg(long)]
    pub progress: bool,
}

impl Args {
    /// Builds the collector configuration described by these arguments.
    pub fn collector_config(&self) -> CollectorConfig {
        let mut config = CollectorConfig::new()
            .with_page_delay(Duration::from_millis(self.delay_ms))
            .with_search(self.search.clone());
        if let Some(size) = self.page_size {
            config = config.with_page_size(size as usize);
        }
        config
    }

    /// Result cap for the collection run.
    pub fn result_cap(&self) -> usize {
        self.limit as usize
    }
}
