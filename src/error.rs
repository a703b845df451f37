//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure in the library. Parse failures are atomic: when
//! [`parse_export`](crate::parser::parse_export) returns an error, no records
//! were produced.
//!
//! # Error Families
//!
//! | Family | Variants |
//! |--------|----------|
//! | Export cannot be analyzed | [`InvalidInput`](ChatlensError::InvalidInput), [`NoMessagesFound`](ChatlensError::NoMessagesFound), [`StreamAlignment`](ChatlensError::StreamAlignment), [`TimestampParse`](ChatlensError::TimestampParse) |
//! | Bad caller arguments | [`InvalidDate`](ChatlensError::InvalidDate), [`InvalidFormat`](ChatlensError::InvalidFormat), [`Config`](ChatlensError::Config) |
//! | Host I/O and encoding | [`Io`](ChatlensError::Io), [`Csv`](ChatlensError::Csv), [`Json`](ChatlensError::Json) |

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The export is not usable text: empty, blank, or not valid UTF-8.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },

    /// No timestamp markers were found; the text is not a recognized export.
    #[error("No messages found: the input does not look like a chat export")]
    NoMessagesFound,

    /// The number of message segments differs from the number of markers.
    ///
    /// Raised when text that cannot be attributed to any marker is present,
    /// e.g. non-blank content before the first message.
    #[error("Stream alignment error: found {markers} timestamp markers but {segments} segments")]
    StreamAlignment {
        /// Number of timestamp markers found
        markers: usize,
        /// Number of text segments produced by splitting at those markers
        segments: usize,
    },

    /// A marker matched the lexical pattern but is not a valid calendar time.
    #[error("Invalid timestamp '{marker}': {reason}")]
    TimestampParse {
        /// The marker text as it appeared in the export
        marker: String,
        /// Why the marker was rejected
        reason: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// Unknown or unavailable output format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format family that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid runtime configuration, such as a malformed log filter.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred while reading an export or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an invalid input error.
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ChatlensError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a timestamp parse error for the given marker.
    pub fn timestamp_parse(marker: impl Into<String>, reason: impl Into<String>) -> Self {
        ChatlensError::TimestampParse {
            marker: marker.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this error means the export cannot be analyzed.
    ///
    /// Hosts should present these as a single "this export cannot be
    /// analyzed" failure rather than attempting row-level recovery.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            ChatlensError::InvalidInput { .. }
                | ChatlensError::NoMessagesFound
                | ChatlensError::StreamAlignment { .. }
                | ChatlensError::TimestampParse { .. }
        )
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}
