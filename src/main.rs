//! # chatroster CLI
//!
//! Command-line interface for chatroster library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatroster::cli::Args;
use chatroster::collector::Collector;
use chatroster::export::export_to;
use chatroster::progress::stderr_progress;
use chatroster::snapshot::SnapshotClient;
use chatroster::{ChatrosterError, MemberRecord};

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Installs the process-wide tracing subscriber. `RUST_LOG` overrides the
/// default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), ChatrosterError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let mut client = SnapshotClient::load(&args.input)?;
    if let Some(max) = args.max_page {
        client = client.with_max_page_size(max as usize);
    }

    let chat_id = match (args.list, args.chat) {
        (false, Some(id)) => id,
        (true, _) | (false, None) => {
            print_chats(&client);
            return Ok(());
        }
    };

    // Print header
    println!("👥 chatroster v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💬 Chat:    {}", chat_id);
    println!("🔢 Limit:   {}", args.limit);
    if let Some(size) = args.page_size {
        println!("📄 Page:    {}", size);
    }
    if !args.search.is_empty() {
        println!("🔍 Search:  {}", args.search);
    }
    println!();

    let mut collector = Collector::with_config(client, args.collector_config());
    if args.progress {
        collector = collector.with_progress(stderr_progress());
    }

    println!("⏳ Collecting members...");
    let collect_start = Instant::now();
    let members = collector.collect(chat_id, args.result_cap()).await?;
    println!(
        "   Found {} members ({:.2}s)",
        members.len(),
        collect_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {}...", args.format);
    let written = export_to(collector.store(), args.format, args.output.as_deref())?;

    println!();
    println!("✅ Done! Output saved to {}", written.display());

    if !members.is_empty() && args.preview > 0 {
        println!();
        println!("📋 First {} members:", args.preview.min(members.len()));
        for member in members.iter().take(args.preview) {
            println!("   {}", preview_line(member));
        }
    }

    println!();
    println!("📊 Summary:");
    println!("   Members:     {}", members.len());
    println!("   Total time:  {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Prints the chats available in the snapshot.
fn print_chats(client: &SnapshotClient) {
    let chats = client.chats();
    if chats.is_empty() {
        println!("No chats available.");
        return;
    }

    println!("Available chats:");
    for (idx, chat) in chats.iter().enumerate() {
        let note = if chat.access_denied { " [admin only]" } else { "" };
        println!(
            "{}. {} (ID: {}, {} entries){}",
            idx + 1,
            chat.title,
            chat.id,
            chat.participants,
            note
        );
    }
}

fn preview_line(member: &MemberRecord) -> String {
    match member.username() {
        Some(handle) => format!("ID: {}, Username: {}", member.id(), handle),
        None => format!("ID: {}, Name: {}", member.id(), member.display_name()),
    }
}
