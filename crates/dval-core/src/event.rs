//! # Event Interpretation
//!
//! Extracts the object to validate from an invocation event. Two shapes
//! are recognized:
//!
//! - **S3 notification**: `{"Records": [{"s3": {"bucket": {"name": ..},
//!   "object": {"key": ..}}}, ..]}`. Only the first record is used.
//! - **Direct invocation**: `{"bucket": .., "key": ..}`.
//!
//! The presence of `Records` selects the notification shape outright; an
//! event carrying a malformed `Records` list is rejected even if it also
//! has top-level `bucket`/`key` fields. Keys are taken verbatim: S3
//! notification keys are not URL-decoded.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::EventError;

const RECORD_BUCKET_POINTER: &str = "/Records/0/s3/bucket/name";
const RECORD_KEY_POINTER: &str = "/Records/0/s3/object/key";

/// A `(bucket, key)` pair addressing one object in the object store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObjectLocation {
    /// Container (bucket) name.
    pub bucket: String,
    /// Object key within the container.
    pub key: String,
}

impl ObjectLocation {
    /// Create a location from its parts.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Interpret an invocation event.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidEventShape`] when the event matches
    /// neither supported shape, or when either field is not a string.
    pub fn from_event(event: &Value) -> Result<Self, EventError> {
        if event.get("Records").is_some() {
            let bucket = str_at(event, RECORD_BUCKET_POINTER)?;
            let key = str_at(event, RECORD_KEY_POINTER)?;
            return Ok(Self::new(bucket, key));
        }

        match (event.get("bucket"), event.get("key")) {
            (Some(Value::String(bucket)), Some(Value::String(key))) => {
                Ok(Self::new(bucket.as_str(), key.as_str()))
            }
            _ => Err(EventError::InvalidEventShape),
        }
    }

    /// The `s3://<bucket>/<key>` URI for this object.
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

fn str_at<'a>(event: &'a Value, pointer: &str) -> Result<&'a str, EventError> {
    event
        .pointer(pointer)
        .and_then(Value::as_str)
        .ok_or(EventError::InvalidEventShape)
}
