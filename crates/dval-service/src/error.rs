//! Runtime error types.

use dval_core::{FormatError, ObjectLocation};
use dval_schema::SchemaValidationError;
use thiserror::Error;

/// Startup configuration error. Fatal: the process exits before serving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set to a value outside its accepted set.
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },
}

/// Errors from an object store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No object exists at the location.
    #[error("object not found: {location}")]
    NotFound {
        /// Requested object.
        location: ObjectLocation,
    },

    /// The bucket or key cannot be mapped onto this store.
    #[error("invalid object key for {location}: {reason}")]
    InvalidKey {
        /// Requested object.
        location: ObjectLocation,
        /// Why the key was refused.
        reason: String,
    },

    /// Transport, permission or service failure.
    #[error("failed to fetch {location}: {reason}")]
    Backend {
        /// Requested object.
        location: ObjectLocation,
        /// Backend error description.
        reason: String,
    },
}

/// Error publishing a notification.
#[derive(Error, Debug)]
#[error("failed to publish to {topic}: {reason}")]
pub struct NotifyError {
    /// Destination topic.
    pub topic: String,
    /// Backend error description.
    pub reason: String,
}

/// A failure after the request was accepted. Answered with a 500 and a
/// best-effort "Data Processing Error" notification.
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// The schema document could not be fetched.
    #[error("schema unavailable: {0}")]
    SchemaFetch(#[source] StoreError),

    /// The schema document could not be parsed or compiled.
    #[error("{0}")]
    Schema(#[from] SchemaValidationError),

    /// The data object could not be fetched.
    #[error("{0}")]
    Fetch(#[from] StoreError),

    /// The data object could not be parsed.
    #[error("{0}")]
    Parse(#[from] FormatError),
}
