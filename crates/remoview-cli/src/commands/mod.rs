//! Command implementations

mod config;
mod coords;
mod history;
mod play;
mod show;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;
use remoview_core::config::LayeredConfig;
use remoview_store::JsonFileHistoryStore;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;
    tracing::debug!(
        model = %config.model.value,
        history = %config.history_path.value.display(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Play(args) => play::execute(args, &config, &output).await,
        Commands::History(args) => history::execute(args, &config, &output).await,
        Commands::Show(args) => show::execute(args, &config, &output).await,
        Commands::Coords(args) => coords::execute(args, &output),
        Commands::Config => config::execute(&config, &output),
    }
}

/// History store at the configured path
fn history_store(config: &LayeredConfig) -> JsonFileHistoryStore {
    JsonFileHistoryStore::new(config.history_path.value.clone())
}
