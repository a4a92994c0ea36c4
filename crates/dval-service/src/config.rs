//! # Service Configuration
//!
//! Read once at process start from the environment:
//!
//! | Variable          | Meaning |
//! |-------------------|---------|
//! | `SCHEMA_BUCKET`   | bucket holding the JSON Schema document |
//! | `SCHEMA_KEY`      | key of the JSON Schema document |
//! | `SNS_TOPIC_ARN`   | topic receiving failure notifications |
//! | `DVAL_LOG_FORMAT` | optional, `json` or `text` |
//!
//! The first three are required; a missing or empty value is a fatal
//! startup error.

use dval_core::ObjectLocation;

use crate::error::ConfigError;
use crate::telemetry::LogFormat;

/// Environment variable naming the schema bucket.
pub const SCHEMA_BUCKET_VAR: &str = "SCHEMA_BUCKET";
/// Environment variable naming the schema key.
pub const SCHEMA_KEY_VAR: &str = "SCHEMA_KEY";
/// Environment variable naming the notification topic.
pub const TOPIC_ARN_VAR: &str = "SNS_TOPIC_ARN";
/// Environment variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "DVAL_LOG_FORMAT";

/// Validated service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Where the schema document lives.
    pub schema_location: ObjectLocation,
    /// Notification topic ARN.
    pub topic_arn: String,
    /// Log output format, if overridden.
    pub log_format: Option<LogFormat>,
}

impl ServiceConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let schema_location =
            ObjectLocation::new(required(SCHEMA_BUCKET_VAR)?, required(SCHEMA_KEY_VAR)?);
        let topic_arn = required(TOPIC_ARN_VAR)?;
        let log_format = match lookup(LOG_FORMAT_VAR).filter(|v| !v.is_empty()) {
            Some(v) => Some(v.parse::<LogFormat>().map_err(|_| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                value: v.clone(),
                expected: "json or text",
            })?),
            None => None,
        };

        Ok(Self {
            schema_location,
            topic_arn,
            log_format,
        })
    }
}
