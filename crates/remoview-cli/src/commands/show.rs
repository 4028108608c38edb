use crate::cli::ShowArgs;
use crate::errors;
use crate::output::OutputWriter;
use crate::report;
use anyhow::{Context, Result};
use remoview_core::config::LayeredConfig;
use remoview_core::models::SessionId;
use remoview_store::HistoryStore;

use super::history_store;

pub async fn execute(args: ShowArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let id: SessionId = args.id.trim().parse().map_err(|_| errors::session_not_found(&args.id))?;

    let store = history_store(config);
    let result = store
        .find(id)
        .await
        .with_context(|| format!("Failed to read history from {}", store.path().display()))?
        .ok_or_else(|| errors::session_not_found(&args.id))?;

    if output.is_json() {
        output.result(&result)
    } else {
        report::render(output, &result)
    }
}
