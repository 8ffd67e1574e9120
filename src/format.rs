//! Export format selection.
//!
//! Export formats are chosen with a free-form selector string (for example
//! from a command line flag). Selectors are matched case-insensitively; an
//! unknown selector yields [`ChatrosterError::UnsupportedFormat`].
//!
//! # Example
//!
//! ```rust
//! use chatroster::format::ExportFormat;
//!
//! let format: ExportFormat = "CSV".parse().unwrap();
//! assert_eq!(format, ExportFormat::Csv);
//! assert_eq!(format.extension(), "csv");
//!
//! assert!("xml".parse::<ExportFormat>().is_err());
//! ```

use std::path::PathBuf;

use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::ChatrosterError;

/// Prefix of synthesized export file names.
pub const DEFAULT_FILE_PREFIX: &str = "chat_participants";

/// `strftime` pattern of the timestamp in synthesized file names.
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    /// Comma-separated values, UTF-8, one header row.
    #[default]
    Csv,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
        }
    }

    /// Returns all supported selector names.
    pub fn all_names() -> &'static [&'static str] {
        &["csv"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
        }
    }

    /// Builds the file name used when the caller gives no output path:
    /// `chat_participants_<YYYYMMDD_HHMMSS>.<ext>`.
    ///
    /// ```rust
    /// use chrono::{Local, TimeZone};
    /// use chatroster::format::ExportFormat;
    ///
    /// let at = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
    /// assert_eq!(
    ///     ExportFormat::Csv.default_file_name(at),
    ///     "chat_participants_20240309_070501.csv"
    /// );
    /// ```
    pub fn default_file_name<Tz>(&self, at: DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "{}_{}.{}",
            DEFAULT_FILE_PREFIX,
            at.format(FILE_TIMESTAMP_FORMAT),
            self.extension()
        )
    }

    /// Builds a default export path in the working directory stamped with the
    /// current local time.
    pub fn default_path(&self) -> PathBuf {
        PathBuf::from(self.default_file_name(Local::now()))
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ChatrosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ChatrosterError::unsupported_format(s)),
        }
    }
}
