//! # dval-schema — Schema Validation
//!
//! Compiles a JSON Schema document and validates data values against it.
//!
//! ## Runtime Validation (`validate`)
//!
//! - [`SchemaValidator::from_bytes`] — parse and compile a schema fetched
//!   from the object store.
//! - [`SchemaValidator::validate`] — check a value, stopping at the first
//!   violation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dval-*` crates.
//! - Never performs network I/O: remote `$ref` targets are not fetched.
//! - A malformed schema is an error; a non-conforming document is not.

pub mod validate;

pub use validate::{SchemaValidationError, SchemaValidator, ValidationOutcome, Violation};
