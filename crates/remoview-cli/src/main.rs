//! RemoView CLI - Command-line interface
//!
//! Plays remote viewing sessions against the Gemini API and inspects the
//! local session history.

mod cli;
mod commands;
mod config_loader;
mod errors;
mod interactive;
mod output;
mod output_types;
mod progress;
mod report;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use errors::CliError;
use output::OutputWriter;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();
    let json = cli.json;

    // Create async runtime
    let runtime = tokio::runtime::Runtime::new()?;

    // Execute the command
    let outcome = runtime.block_on(async { commands::execute(cli).await });

    if let Err(err) = outcome {
        match err.downcast_ref::<CliError>() {
            Some(cli_err) if json => OutputWriter::new(true).error(&cli_err.message),
            Some(cli_err) => cli_err.display(),
            None => return Err(err),
        }
        std::process::exit(1);
    }

    Ok(())
}
