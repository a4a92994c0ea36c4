//! # Validate Subcommand
//!
//! Validates a local data file against a local schema file and prints the
//! resulting report. The data format is chosen from the file name exactly
//! as it is for object keys.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use dval_core::{DataFormat, ValidationReport};
use dval_schema::SchemaValidator;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON Schema document.
    #[arg(long)]
    pub schema: PathBuf,

    /// Data file ending in `.json` or `.csv`.
    pub file: PathBuf,
}

/// Validate and build the report. Errors cover unreadable inputs,
/// unsupported file names, and malformed schemas or data.
pub fn run_validate(args: &ValidateArgs) -> anyhow::Result<ValidationReport> {
    let file_name = args.file.to_string_lossy();
    let format = DataFormat::from_key(&file_name)?;

    let validator = SchemaValidator::from_file(&args.schema)?;
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let data = format.parse(&bytes)?;

    let outcome = validator.validate(&data);
    tracing::debug!(file = %file_name, %format, is_valid = outcome.is_valid(), "validated");
    Ok(ValidationReport::new(file_name.into_owned(), outcome.errors()))
}
