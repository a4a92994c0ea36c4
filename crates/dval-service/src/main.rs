//! # dval-lambda Entry Point
//!
//! Loads configuration, builds the AWS clients once, and serves
//! invocations through `lambda_runtime`.

use aws_config::BehaviorVersion;
use dval_core::ResponseEnvelope;
use dval_service::{
    init_tracing, LogFormat, Notifier, ObjectStore, S3ObjectStore, ServiceConfig, SnsNotifier,
    ValidationHandler,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ServiceConfig::from_env()?;
    init_tracing(config.log_format.unwrap_or(LogFormat::Json));

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = S3ObjectStore::new(aws_sdk_s3::Client::new(&sdk_config));
    let notifier = SnsNotifier::new(aws_sdk_sns::Client::new(&sdk_config), &config.topic_arn);
    let handler = ValidationHandler::new(store, notifier, config.schema_location);

    tracing::info!(
        schema = %handler.schema_location(),
        topic = handler.notifier().topic_arn(),
        "dval-lambda ready"
    );
    run(service_fn(|event| respond(&handler, event))).await
}

async fn respond<S: ObjectStore, N: Notifier>(
    handler: &ValidationHandler<S, N>,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    tracing::debug!(request_id = %event.context.request_id, "invocation");
    Ok(handler.handle(&event.payload).await)
}
