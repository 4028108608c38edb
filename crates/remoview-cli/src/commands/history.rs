use crate::cli::HistoryArgs;
use crate::output::OutputWriter;
use crate::output_types::HistoryRow;
use anyhow::{Context, Result};
use remoview_core::config::LayeredConfig;
use remoview_store::HistoryStore;

use super::history_store;

pub async fn execute(args: HistoryArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = history_store(config);
    let mut entries = store
        .load()
        .await
        .with_context(|| format!("Failed to read history from {}", store.path().display()))?;

    let total = entries.len();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if output.is_json() {
        return output.result(&entries);
    }

    output.section("Session history");
    let rows: Vec<HistoryRow> = entries.iter().map(HistoryRow::from_result).collect();
    output.table(&rows)?;

    if total > rows.len() {
        output.info(format!("Showing {} of {} sessions", rows.len(), total));
    } else if total > 0 {
        output.info("Run `remoview show <ID>` for the full result");
    }

    Ok(())
}
