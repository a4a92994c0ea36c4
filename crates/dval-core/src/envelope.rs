//! # Response Envelope
//!
//! The handler's only externally observable output besides notifications:
//!
//! ```json
//! {"statusCode": 200, "body": "<JSON-encoded body>"}
//! ```
//!
//! The decoded body is either a [`ValidationReport`] (status 200, whether
//! or not the data was valid) or an [`ErrorBody`] (status 400 or 500).
//! Partial results are never returned.

use serde::{Deserialize, Serialize};

use crate::event::ObjectLocation;
use crate::temporal::Timestamp;

/// Outcome of validating one object, returned with status 200.
///
/// Field order is part of the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `s3://<bucket>/<key>` of the validated object.
    pub file: String,
    /// When the verdict was reached.
    pub timestamp: Timestamp,
    /// Whether the data satisfied the schema.
    pub is_valid: bool,
    /// Human-readable violations; empty iff `is_valid`.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Build a report stamped with the current time.
    ///
    /// `is_valid` is derived from `errors` so the two can never disagree.
    pub fn new(file: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            file: file.into(),
            timestamp: Timestamp::now(),
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Build a report for an object in the store.
    pub fn for_object(location: &ObjectLocation, errors: Vec<String>) -> Self {
        Self::new(location.uri(), errors)
    }
}

/// Body used if a response body ever fails to encode. Still a valid
/// single-field [`ErrorBody`].
const UNENCODABLE_BODY: &str = r#"{"error":"response body could not be encoded"}"#;

/// Single-field body returned with status 400 or 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Description of what went wrong.
    pub error: String,
}

/// Top-level handler response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    /// HTTP-style status: 200, 400 or 500.
    pub status_code: u16,
    /// JSON-encoded [`ValidationReport`] or [`ErrorBody`].
    pub body: String,
}

impl ResponseEnvelope {
    /// Status for a completed validation, valid or not.
    pub const OK: u16 = 200;
    /// Status for an unusable request (event shape, file format).
    pub const BAD_REQUEST: u16 = 400;
    /// Status for a failure while processing a well-formed request.
    pub const SERVER_ERROR: u16 = 500;

    /// A 200 response carrying the report.
    pub fn ok(report: &ValidationReport) -> Self {
        Self::with_body(Self::OK, report)
    }

    /// A 400 response carrying `{"error": message}`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::error(Self::BAD_REQUEST, message)
    }

    /// A 500 response carrying `{"error": message}`.
    pub fn server_error(message: impl Into<String>) -> Self {
        Self::error(Self::SERVER_ERROR, message)
    }

    fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self::with_body(
            status_code,
            &ErrorBody {
                error: message.into(),
            },
        )
    }

    fn with_body<T: Serialize>(status_code: u16, body: &T) -> Self {
        let body = serde_json::to_string(body)
            .unwrap_or_else(|_| String::from(UNENCODABLE_BODY));
        Self { status_code, body }
    }

    /// Decode the body as a validation report.
    pub fn report(&self) -> Result<ValidationReport, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Decode the body as an error body.
    pub fn error_body(&self) -> Result<ErrorBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
