use crate::output::OutputWriter;
use crate::output_types::ConfigRow;
use anyhow::Result;
use remoview_core::config::LayeredConfig;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut rows: Vec<ConfigRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigRow { key, value, source })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        return output.result(&rows);
    }

    output.section("Configuration");
    output.table(&rows)?;
    if config.api_key.value.is_none() {
        output.warning("No API key set; `remoview play` needs REMOVIEW_API_KEY or --api-key");
    }

    Ok(())
}
