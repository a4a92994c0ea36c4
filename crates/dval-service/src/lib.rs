//! # dval-service — Validation Runtime
//!
//! Wires the pure pipeline stages from `dval-core` and `dval-schema` to
//! real collaborators and hosts them on AWS Lambda.
//!
//! ## Seams
//!
//! - [`ObjectStore`] — fetch object bytes ([`S3ObjectStore`], [`FsObjectStore`]).
//! - [`Notifier`] — publish alerts ([`SnsNotifier`], [`LogNotifier`]).
//!
//! Both are passed into [`ValidationHandler`] at construction, so tests and
//! the local CLI substitute their own implementations.
//!
//! ## Crate Policy
//!
//! - Clients are created once at startup and reused for every invocation.
//! - No retries: each external call is attempted once.
//! - `ValidationHandler::handle` never fails; every error becomes a response.

pub mod config;
pub mod error;
pub mod handler;
pub mod notify;
pub mod store;
pub mod telemetry;

pub use config::ServiceConfig;
pub use error::{ConfigError, NotifyError, ProcessingError, StoreError};
pub use handler::ValidationHandler;
pub use notify::{
    LogNotifier, Notifier, SnsNotifier, PROCESSING_ERROR_SUBJECT, VALIDATION_FAILURE_SUBJECT,
};
pub use store::{FsObjectStore, ObjectStore, S3ObjectStore};
pub use telemetry::{init_tracing, LogFormat};
