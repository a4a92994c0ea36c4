//! # Error Types
//!
//! Errors raised by the I/O-free pipeline stages. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - `EventError` and `FormatError::Unsupported` are request errors: the
//!   caller answers them with a 400 and never reaches an external service.
//! - `FormatError::Parse` is a processing error: the object was fetched
//!   but its content could not be turned into a structured value.

use thiserror::Error;

/// The exact message returned for an unrecognized invocation shape.
pub const INVALID_EVENT_MESSAGE: &str =
    "Invalid event structure. Expected S3 event or direct invocation with bucket and key.";

/// Error interpreting the invocation event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// Neither the `Records` form nor the direct `{bucket, key}` form matched.
    #[error("{}", INVALID_EVENT_MESSAGE)]
    InvalidEventShape,
}

/// Error selecting or running a format parser.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The object key carries a suffix with no registered parser.
    #[error("Unsupported file format: {key}")]
    Unsupported {
        /// The object key that was inspected.
        key: String,
    },

    /// The object bytes could not be parsed in the selected format.
    #[error("{format} parse error: {reason}")]
    Parse {
        /// Format that was being parsed (`json` or `csv`).
        format: &'static str,
        /// Underlying parser message.
        reason: String,
    },
}

/// Error parsing a timestamp string.
#[derive(Error, Debug)]
#[error("invalid RFC 3339 timestamp {input:?}: {source}")]
pub struct TimestampError {
    /// The rejected input.
    pub input: String,
    /// Parser failure.
    #[source]
    pub source: chrono::ParseError,
}
