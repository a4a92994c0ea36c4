//! # Invoke Subcommand
//!
//! Runs one invocation through `ValidationHandler`, backed by a local
//! directory (`<root>/<bucket>/<key>`) instead of S3 and by the log
//! instead of SNS. Prints the response envelope.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use dval_core::{ObjectLocation, ResponseEnvelope};
use dval_service::{FsObjectStore, LogNotifier, ValidationHandler};
use serde_json::Value;

/// Arguments for the invoke subcommand.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Directory whose subdirectories act as buckets.
    #[arg(long)]
    pub root: PathBuf,

    /// Bucket holding the schema document.
    #[arg(long)]
    pub schema_bucket: String,

    /// Key of the schema document.
    #[arg(long)]
    pub schema_key: String,

    /// Invocation event as inline JSON.
    #[arg(long, conflicts_with = "event_file", required_unless_present = "event_file")]
    pub event: Option<String>,

    /// File containing the invocation event.
    #[arg(long)]
    pub event_file: Option<PathBuf>,
}

impl InvokeArgs {
    fn load_event(&self) -> anyhow::Result<Value> {
        let text = match (&self.event, &self.event_file) {
            (Some(inline), _) => inline.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("cannot read event file {}", path.display()))?,
            (None, None) => anyhow::bail!("one of --event or --event-file is required"),
        };
        serde_json::from_str(&text).context("event is not valid JSON")
    }
}

/// Run the handler once. Errors only cover loading the event itself;
/// pipeline failures come back inside the envelope.
pub async fn run_invoke(args: &InvokeArgs) -> anyhow::Result<ResponseEnvelope> {
    let event = args.load_event()?;
    let handler = ValidationHandler::new(
        FsObjectStore::new(&args.root),
        LogNotifier,
        ObjectLocation::new(args.schema_bucket.as_str(), args.schema_key.as_str()),
    );
    tracing::debug!(root = %handler.store().root().display(), "serving objects from disk");
    Ok(handler.handle(&event).await)
}
