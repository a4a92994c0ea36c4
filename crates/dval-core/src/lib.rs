//! # dval-core — Foundational Types for dval
//!
//! The I/O-free stages of the validation pipeline. Everything here is a
//! pure function of its inputs, so the runtime crate only has to supply
//! bytes from the object store and route the results.
//!
//! ## Modules
//!
//! - [`event`] — interpret an invocation event into an [`ObjectLocation`].
//! - [`format`] — pick a parser from the key suffix and turn bytes into JSON.
//! - [`envelope`] — the [`ValidationReport`] and [`ResponseEnvelope`] wire types.
//! - [`temporal`] — UTC [`Timestamp`] rendered as ISO 8601.
//! - [`error`] — request and parse error types.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dval-*` crates (this is the leaf of the DAG).
//! - No I/O, no async.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod envelope;
pub mod error;
pub mod event;
pub mod format;
pub mod temporal;

pub use envelope::{ErrorBody, ResponseEnvelope, ValidationReport};
pub use error::{EventError, FormatError, TimestampError, INVALID_EVENT_MESSAGE};
pub use event::ObjectLocation;
pub use format::{DataFormat, CSV_OVERFLOW_KEY};
pub use temporal::Timestamp;
