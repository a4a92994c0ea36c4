//! # Notifications
//!
//! The [`Notifier`] seam publishes operational alerts. Publishing is
//! fire-and-forget from the pipeline's point of view: the handler logs a
//! failed publish and carries on, so implementations only need to report
//! the failure, never recover from it.

use async_trait::async_trait;
use aws_sdk_sns::error::DisplayErrorContext;
use dval_core::ObjectLocation;
use tracing::{info, warn};

use crate::error::NotifyError;

/// Subject used when a file was read but did not satisfy the schema.
pub const VALIDATION_FAILURE_SUBJECT: &str = "Data Validation Failure";
/// Subject used when processing failed before a verdict was reached.
pub const PROCESSING_ERROR_SUBJECT: &str = "Data Processing Error";

/// Publishes alert messages to a topic.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Publish one message.
    async fn publish(&self, subject: &str, message: &str) -> Result<(), NotifyError>;
}

/// Message body for a failed validation.
pub fn validation_failure_message(location: &ObjectLocation, errors: &[String]) -> String {
    format!(
        "Data validation failed for file {location}\n\nErrors:\n{}",
        errors.join("\n")
    )
}

/// SNS-backed notifier.
#[derive(Debug, Clone)]
pub struct SnsNotifier {
    client: aws_sdk_sns::Client,
    topic_arn: String,
}

impl SnsNotifier {
    /// Publish to `topic_arn` through `client`.
    pub fn new(client: aws_sdk_sns::Client, topic_arn: impl Into<String>) -> Self {
        Self {
            client,
            topic_arn: topic_arn.into(),
        }
    }

    /// Destination topic.
    pub fn topic_arn(&self) -> &str {
        &self.topic_arn
    }
}

#[async_trait]
impl Notifier for SnsNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), NotifyError> {
        self.client
            .publish()
            .topic_arn(&self.topic_arn)
            .subject(subject)
            .message(message)
            .send()
            .await
            .map_err(|e| NotifyError {
                topic: self.topic_arn.clone(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;
        info!(subject, topic = %self.topic_arn, "notification sent");
        Ok(())
    }
}

/// Notifier that writes alerts to the log instead of a topic.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn publish(&self, subject: &str, message: &str) -> Result<(), NotifyError> {
        warn!(subject, message, "notification");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failure_message_layout() {
        let location = ObjectLocation::new("incoming", "rows.csv");
        let message = validation_failure_message(
            &location,
            &["/0/qty: null is not of type \"string\"".to_string()],
        );
        assert_eq!(
            message,
            "Data validation failed for file s3://incoming/rows.csv\n\nErrors:\n/0/qty: null is not of type \"string\""
        );
    }

    #[test]
    fn test_sns_notifier_keeps_topic() {
        let config = aws_sdk_sns::Config::builder()
            .behavior_version(aws_sdk_sns::config::BehaviorVersion::latest())
            .build();
        let notifier = SnsNotifier::new(
            aws_sdk_sns::Client::from_conf(config),
            "arn:aws:sns:eu-west-1:123456789012:data-alerts",
        );
        assert_eq!(notifier.topic_arn(), "arn:aws:sns:eu-west-1:123456789012:data-alerts");
    }

    #[tokio::test]
    async fn test_log_notifier_never_fails() {
        LogNotifier
            .publish(PROCESSING_ERROR_SUBJECT, "Error processing file s3://b/k: boom")
            .await
            .unwrap();
    }
}
