//! # dval CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;
use dval_service::{init_tracing, LogFormat};

/// dval — validate JSON and CSV data files against a JSON Schema.
#[derive(Parser, Debug)]
#[command(name = "dval", version, about)]
struct Cli {
    /// Emit logs as JSON lines instead of text.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate a local file against a local schema.
    Validate(dval_cli::validate::ValidateArgs),
    /// Run the validation handler against a local object tree.
    Invoke(dval_cli::invoke::InvokeArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Text
    });

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Validate(args) => {
            let report = dval_cli::validate::run_validate(&args)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(if report.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Invoke(args) => {
            let response = dval_cli::invoke::run_invoke(&args).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(if response.status_code == 200 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
