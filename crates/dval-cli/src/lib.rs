//! # dval-cli — Local Validation Tool
//!
//! Runs the same validation code as the Lambda function without AWS.
//!
//! ## Subcommands
//!
//! - `validate` — check one local data file against one local schema file
//! - `invoke` — feed an invocation event to the full handler, with a local
//!   directory standing in for the object store
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; validation logic stays in the library crates.
//! - Results go to stdout as JSON; diagnostics go to the log on stderr.

pub mod invoke;
pub mod validate;
