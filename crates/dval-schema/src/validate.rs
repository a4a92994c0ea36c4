//! # Schema Validation
//!
//! Runtime validation of JSON values against a single JSON Schema
//! document. The schema draft is detected from its `$schema` keyword and
//! defaults to Draft 2020-12.
//!
//! ## First Violation Only
//!
//! Validation is a single pass that stops at the first schema rule the
//! instance breaks. A document with several problems therefore reports
//! one of them; fixing it and re-running surfaces the next. This keeps
//! notification messages short and is an accepted limitation.
//!
//! ## Structural Checks Only
//!
//! The `format` keyword is treated as an annotation on every draft:
//! `"format": "email"` or `"date"` never rejects a string. Without this,
//! Draft 4/6/7 schemas would assert formats while 2019-09/2020-12 schemas
//! would not, and the verdict would depend on the `$schema` line.
//!
//! ## Schema Resolution
//!
//! Internal `$ref`s (`#/definitions/..`, `#/$defs/..`) resolve natively.
//! External `$ref` URIs are never fetched: a local retriever answers every
//! lookup with the permissive schema `{}`, so such references accept any
//! value rather than causing network traffic during an invocation.

use std::fmt;
use std::path::Path;

use jsonschema::{Retrieve, Uri, Validator};
use serde_json::Value;
use thiserror::Error;

/// Retriever that resolves every external `$ref` to `{}` without I/O.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        _uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Ok(serde_json::json!({}))
    }
}

/// Error preparing a schema for validation.
///
/// Both variants indicate a problem with the schema document itself, not
/// with the data being validated.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The schema bytes could not be read or parsed as JSON.
    #[error("schema load error for '{schema_name}': {reason}")]
    SchemaLoadError {
        /// Schema location or identifier.
        schema_name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The compiled validator could not be built (e.g., invalid schema).
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError {
        /// Schema location or identifier.
        schema_name: String,
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Verdict of one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// True when the instance satisfied the schema.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Human-readable violation messages, empty iff valid.
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(Violation::to_string).collect()
    }
}

/// A compiled schema backed by the `jsonschema` crate.
///
/// ## Thread Safety
///
/// `SchemaValidator` is `Send + Sync`; a compiled validator can be shared
/// across threads.
pub struct SchemaValidator {
    schema_name: String,
    validator: Validator,
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}

impl SchemaValidator {
    /// Parse raw schema bytes as JSON and compile them.
    ///
    /// `schema_name` identifies the schema in error messages.
    ///
    /// # Errors
    ///
    /// Returns `SchemaLoadError` if the bytes are not UTF-8 JSON, and
    /// `ValidatorBuildError` if the document is not a valid schema.
    pub fn from_bytes(
        schema_name: impl Into<String>,
        bytes: &[u8],
    ) -> Result<Self, SchemaValidationError> {
        let schema_name = schema_name.into();
        let text = std::str::from_utf8(bytes).map_err(|e| {
            SchemaValidationError::SchemaLoadError {
                schema_name: schema_name.clone(),
                reason: format!("not UTF-8: {e}"),
            }
        })?;
        let value: Value = serde_json::from_str(text).map_err(|e| {
            SchemaValidationError::SchemaLoadError {
                schema_name: schema_name.clone(),
                reason: format!("invalid JSON: {e}"),
            }
        })?;
        Self::from_value(schema_name, &value)
    }

    /// Read a schema file from disk and compile it.
    pub fn from_file(path: &Path) -> Result<Self, SchemaValidationError> {
        let schema_name = path.display().to_string();
        let bytes = std::fs::read(path).map_err(|e| SchemaValidationError::SchemaLoadError {
            schema_name: schema_name.clone(),
            reason: format!("cannot read file: {e}"),
        })?;
        Self::from_bytes(schema_name, &bytes)
    }

    /// Compile an already-parsed schema document.
    pub fn from_value(
        schema_name: impl Into<String>,
        schema: &Value,
    ) -> Result<Self, SchemaValidationError> {
        let schema_name = schema_name.into();
        let validator = jsonschema::options()
            .with_retriever(OfflineRetriever)
            .should_validate_formats(false)
            .build(schema)
            .map_err(|e| SchemaValidationError::ValidatorBuildError {
                schema_name: schema_name.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            schema_name,
            validator,
        })
    }

    /// Name given to the schema at construction.
    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Validate a value, stopping at the first violation.
    pub fn validate(&self, instance: &Value) -> ValidationOutcome {
        match self.validator.validate(instance) {
            Ok(()) => ValidationOutcome::default(),
            Err(e) => ValidationOutcome {
                violations: vec![Violation {
                    instance_path: e.instance_path.to_string(),
                    schema_path: e.schema_path.to_string(),
                    message: e.to_string(),
                }],
            },
        }
    }
}
