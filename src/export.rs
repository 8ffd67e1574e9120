//! CSV export of collected members.
//!
//! # Format
//! - Delimiter: `,`
//! - Columns: `ID`, `Username`, `First Name`, `Last Name`, `Phone`,
//!   `Is Bot`, `Is Premium`, `Joined Date`
//! - Encoding: UTF-8
//! - Absent values are empty fields, flags are `true` / `false`, the join
//!   date is RFC 3339
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatroster::Result<()> {
//! use chatroster::{MemberRecord, RecordStore};
//! use chatroster::export::export;
//!
//! let store: RecordStore = vec![
//!     MemberRecord::new(1).with_username("alice"),
//!     MemberRecord::new(2).with_first_name("Богдан"),
//! ]
//! .into_iter()
//! .collect();
//!
//! // Explicit path
//! export(&store, "csv", Some("members.csv".as_ref()))?;
//!
//! // chat_participants_<timestamp>.csv in the working directory
//! let written = export(&store, "csv", None)?;
//! println!("saved to {}", written.display());
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::format::ExportFormat;
use crate::member::MemberRecord;
use crate::store::RecordStore;

/// Header row written at the top of every CSV export.
pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Username",
    "First Name",
    "Last Name",
    "Phone",
    "Is Bot",
    "Is Premium",
    "Joined Date",
];

/// Exports a store in the format named by `format`.
///
/// The selector is resolved before any I/O, so an unsupported format never
/// leaves a file behind. When `path` is `None` the file is written to
/// `chat_participants_<YYYYMMDD_HHMMSS>.<ext>` in the working directory.
///
/// Returns the path that was written.
pub fn export(store: &RecordStore, format: &str, path: Option<&Path>) -> Result<PathBuf> {
    export_to(store, format.parse()?, path)
}

/// Exports a store in an already selected format.
///
/// Same file naming as [`export`].
pub fn export_to(store: &RecordStore, format: ExportFormat, path: Option<&Path>) -> Result<PathBuf> {
    let path = path.map_or_else(|| format.default_path(), Path::to_path_buf);

    match format {
        ExportFormat::Csv => write_csv(store, &path)?,
    }

    info!(path = %path.display(), members = store.len(), "members exported");
    Ok(path)
}

/// Writes members to a CSV file, creating or truncating it.
pub fn write_csv<'a, I>(members: I, output_path: impl AsRef<Path>) -> Result<()>
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let file = File::create(output_path)?;
    write_to(members, file)
}

/// Renders members as a CSV string.
///
/// Useful for previews and tests.
pub fn to_csv<'a, I>(members: I) -> Result<String>
where
    I: IntoIterator<Item = &'a MemberRecord>,
{
    let mut buffer = Vec::new();
    write_to(members, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_to<'a, I, W>(members: I, sink: W) -> Result<()>
where
    I: IntoIterator<Item = &'a MemberRecord>,
    W: io::Write,
{
    let mut writer = csv::WriterBuilder::new().from_writer(sink);

    writer.write_record(CSV_HEADER)?;
    for member in members {
        writer.write_record(build_record(member))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV record for a single member, in header order.
fn build_record(member: &MemberRecord) -> [String; 8] {
    [
        member.id.to_string(),
        member.username.clone().unwrap_or_default(),
        member.first_name.clone().unwrap_or_default(),
        member.last_name.clone().unwrap_or_default(),
        member.phone.clone().unwrap_or_default(),
        member.is_bot.to_string(),
        member.is_premium.to_string(),
        member
            .joined_at
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default(),
    ]
}
