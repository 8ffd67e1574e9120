//! Unified error types for chatroster.
//!
//! Every fallible operation in the crate returns [`ChatrosterError`].
//!
//! An access-denied listing outcome is not an error. It is reported as
//! [`PageResult::Denied`](crate::client::PageResult::Denied) and handled
//! inside the collector.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatroster operations.
///
/// # Example
///
/// ```rust
/// use chatroster::error::Result;
/// use chatroster::MemberRecord;
///
/// fn my_function() -> Result<Vec<MemberRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatrosterError>;

/// Boxed error type carried by [`ChatrosterError::Transport`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for all chatroster operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatrosterError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The snapshot file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing the export)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON decoding error while loading a snapshot.
    #[cfg(feature = "snapshot")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested export format is not supported.
    ///
    /// Raised before any file is created.
    #[error("Format '{format}' is not supported. Expected one of: {expected}")]
    UnsupportedFormat {
        /// The selector that was provided
        format: String,
        /// Supported selectors, comma separated
        expected: &'static str,
    },

    /// The result cap passed to a collection run was not positive.
    #[error("Invalid result limit {value}: must be at least 1")]
    InvalidLimit {
        /// The rejected value
        value: usize,
    },

    /// The listing source has no chat with this id.
    #[error("Unknown chat id {id}")]
    UnknownChat {
        /// The requested chat id
        id: i64,
    },

    /// The input doesn't match the expected structure, e.g. a snapshot with
    /// two chats sharing an id.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when rendered output is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Unexpected failure while fetching a page from the listing service.
    ///
    /// This is the one failure class that aborts a collection run.
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),
}

impl From<std::string::FromUtf8Error> for ChatrosterError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatrosterError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatrosterError {
    /// Creates an unsupported export format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        ChatrosterError::UnsupportedFormat {
            format: format.into(),
            expected: "csv",
        }
    }

    /// Creates an invalid limit error.
    pub fn invalid_limit(value: usize) -> Self {
        ChatrosterError::InvalidLimit { value }
    }

    /// Creates an unknown chat error.
    pub fn unknown_chat(id: i64) -> Self {
        ChatrosterError::UnknownChat { id }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatrosterError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Wraps any error raised by a listing transport.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        ChatrosterError::Transport(err.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatrosterError::Io(_))
    }

    /// Returns `true` if this is an unsupported format error.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ChatrosterError::UnsupportedFormat { .. })
    }

    /// Returns `true` if this is an invalid limit error.
    pub fn is_invalid_limit(&self) -> bool {
        matches!(self, ChatrosterError::InvalidLimit { .. })
    }

    /// Returns `true` if this is a transport error.
    pub fn is_transport(&self) -> bool {
        matches!(self, ChatrosterError::Transport(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Display tests for all error variants
    // =========================================================================

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatrosterError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_unsupported_format_display() {
        let err = ChatrosterError::unsupported_format("xml");
        let display = err.to_string();
        assert!(display.contains("'xml'"));
        assert!(display.contains("csv"));
    }

    #[test]
    fn test_invalid_limit_display() {
        let err = ChatrosterError::invalid_limit(0);
        assert!(err.to_string().contains("Invalid result limit 0"));
    }

    #[test]
    fn test_unknown_chat_display() {
        let err = ChatrosterError::unknown_chat(-1001234);
        assert!(err.to_string().contains("-1001234"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatrosterError::invalid_format("snapshot", "missing chats array");
        let display = err.to_string();
        assert!(display.contains("snapshot"));
        assert!(display.contains("missing chats array"));
    }

    #[test]
    fn test_transport_display() {
        let err = ChatrosterError::transport("connection reset");
        let display = err.to_string();
        assert!(display.contains("Transport error"));
        assert!(display.contains("connection reset"));
    }

    // =========================================================================
    // Error source chain tests
    // =========================================================================

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatrosterError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_transport_source_chain() {
        use std::error::Error;
        let inner = io::Error::new(io::ErrorKind::TimedOut, "timed out");
        let err = ChatrosterError::transport(inner);
        let source = err.source().expect("source");
        assert!(source.to_string().contains("timed out"));
    }

    // =========================================================================
    // is_* methods tests
    // =========================================================================

    #[test]
    fn test_is_methods() {
        let io_err = ChatrosterError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_unsupported_format());
        assert!(!io_err.is_invalid_limit());
        assert!(!io_err.is_transport());

        let fmt_err = ChatrosterError::unsupported_format("xlsx");
        assert!(fmt_err.is_unsupported_format());
        assert!(!fmt_err.is_io());

        assert!(ChatrosterError::invalid_limit(0).is_invalid_limit());
        assert!(ChatrosterError::transport("boom").is_transport());
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let io_err = std::io::Error::other("test");
        let csv_err = csv::Error::from(io_err);
        let err: ChatrosterError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }

    #[cfg(feature = "snapshot")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatrosterError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_from_utf8_error() {
        let invalid_bytes = vec![0xff, 0xfe];
        let utf8_err = String::from_utf8(invalid_bytes).unwrap_err();
        let err: ChatrosterError = utf8_err.into();
        assert!(err.to_string().contains("UTF-8"));
        assert!(err.to_string().contains("output conversion"));
    }

    #[test]
    fn test_error_debug() {
        let err = ChatrosterError::invalid_limit(0);
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidLimit"));
    }
}
