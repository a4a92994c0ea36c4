//! # Validation Handler
//!
//! One invocation runs the pipeline
//!
//! ```text
//! event ─▶ location + format ─▶ schema ─▶ object ─▶ parsed data ─▶ verdict ─▶ response
//! ```
//!
//! ## Outcomes
//!
//! | Outcome                         | Status | Notification |
//! |---------------------------------|--------|--------------|
//! | valid data                      | 200    | none |
//! | invalid data                    | 200    | "Data Validation Failure" |
//! | unrecognized event shape        | 400    | none |
//! | unsupported key suffix          | 400    | none |
//! | schema/object/parse failure     | 500    | "Data Processing Error" |
//!
//! Both 400 cases are decided from the event alone, before any call to
//! the object store. Notifications are best-effort: a failed publish is
//! logged and does not change the response.

use dval_core::{DataFormat, ObjectLocation, ResponseEnvelope, ValidationReport};
use dval_schema::SchemaValidator;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::ProcessingError;
use crate::notify::{
    validation_failure_message, Notifier, PROCESSING_ERROR_SUBJECT, VALIDATION_FAILURE_SUBJECT,
};
use crate::store::ObjectStore;

/// Validates objects against a schema held in the same object store.
///
/// Built once per process and reused for every invocation; holds no
/// per-invocation state.
#[derive(Debug)]
pub struct ValidationHandler<S, N> {
    store: S,
    notifier: N,
    schema_location: ObjectLocation,
}

impl<S: ObjectStore, N: Notifier> ValidationHandler<S, N> {
    /// Assemble a handler from its collaborators.
    pub fn new(store: S, notifier: N, schema_location: ObjectLocation) -> Self {
        Self {
            store,
            notifier,
            schema_location,
        }
    }

    /// The object store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Location of the schema document.
    pub fn schema_location(&self) -> &ObjectLocation {
        &self.schema_location
    }

    /// Run one invocation. Every failure is folded into the response.
    #[instrument(skip_all)]
    pub async fn handle(&self, event: &Value) -> ResponseEnvelope {
        info!(%event, "received event");

        let location = match ObjectLocation::from_event(event) {
            Ok(location) => location,
            Err(e) => {
                error!(error = %e, "rejected event");
                return ResponseEnvelope::bad_request(e.to_string());
            }
        };

        let format = match DataFormat::from_key(&location.key) {
            Ok(format) => format,
            Err(e) => {
                error!(file = %location, error = %e, "rejected file");
                return ResponseEnvelope::bad_request(e.to_string());
            }
        };

        match self.process(&location, format).await {
            Ok(report) => {
                info!(file = %report.file, is_valid = report.is_valid, "validation complete");
                if !report.is_valid {
                    let message = validation_failure_message(&location, &report.errors);
                    self.notify(VALIDATION_FAILURE_SUBJECT, &message).await;
                }
                ResponseEnvelope::ok(&report)
            }
            Err(e) => {
                let message = format!("Error processing file {location}: {e}");
                error!("{message}");
                self.notify(PROCESSING_ERROR_SUBJECT, &message).await;
                ResponseEnvelope::server_error(message)
            }
        }
    }

    async fn process(
        &self,
        location: &ObjectLocation,
        format: DataFormat,
    ) -> Result<ValidationReport, ProcessingError> {
        let validator = self.load_schema().await?;
        debug!(schema = validator.schema_name(), "schema loaded");

        let bytes = self.store.get(location).await?;
        debug!(file = %location, bytes = bytes.len(), "object fetched");

        let data = format.parse(&bytes)?;
        debug!(file = %location, %format, "data parsed");

        let outcome = validator.validate(&data);
        for violation in outcome.violations() {
            debug!(
                instance_path = %violation.instance_path,
                schema_path = %violation.schema_path,
                "schema violation"
            );
        }
        Ok(ValidationReport::for_object(location, outcome.errors()))
    }

    async fn load_schema(&self) -> Result<SchemaValidator, ProcessingError> {
        let bytes = self
            .store
            .get(&self.schema_location)
            .await
            .map_err(ProcessingError::SchemaFetch)?;
        Ok(SchemaValidator::from_bytes(self.schema_location.uri(), &bytes)?)
    }

    async fn notify(&self, subject: &str, message: &str) {
        if let Err(e) = self.notifier.publish(subject, message).await {
            error!(subject, error = %e, "error sending notification");
        }
    }
}
