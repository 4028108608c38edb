//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use remoview_core::config::{
    parse_base_url, CliConfigOverrides, LayeredConfig, DEFAULT_CONFIG_FILE, DEFAULT_DATA_DIR,
};
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Default location of the configuration file, relative to the working directory
pub fn default_config_path() -> PathBuf {
    Path::new(DEFAULT_DATA_DIR).join(DEFAULT_CONFIG_FILE)
}

/// Load layered configuration: defaults, file, environment, then CLI flags.
///
/// An explicit `--config` file must exist; the default one is optional.
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let config = match &cli.config {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?,
        None => LayeredConfig::with_defaults()
            .load_from_optional_file(default_config_path())
            .context("Failed to load configuration file")?,
    };

    let mut config = config.load_from_env();
    config.update_from_cli(overrides(cli)?);
    Ok(config)
}

fn overrides(cli: &Cli) -> Result<CliConfigOverrides> {
    let api_base_url = cli
        .api_base_url
        .as_deref()
        .map(parse_base_url)
        .transpose()
        .context("Invalid --api-base-url")?;

    Ok(CliConfigOverrides {
        api_key: cli.api_key.clone().filter(|k| !k.trim().is_empty()),
        model: cli.model.clone(),
        api_base_url,
        history_path: cli.history.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use remoview_core::config::ConfigSource;

    #[test]
    fn test_cli_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        std::fs::write(&config_path, "model = \"from-file\"\nhistory_path = \"file.json\"\n")
            .unwrap();

        let cli = Cli::parse_from([
            "remoview",
            "--config",
            config_path.to_str().unwrap(),
            "--history",
            "flag.json",
            "--api-base-url",
            "http://localhost:8080/",
            "config",
        ]);
        let config = load_config(&cli).unwrap();

        assert_eq!(config.history_path.value, PathBuf::from("flag.json"));
        assert_eq!(config.history_path.source, ConfigSource::Cli);
        assert_eq!(config.api_base_url.value, "http://localhost:8080");
        assert_eq!(config.api_base_url.source, ConfigSource::Cli);
    }

    #[test]
    fn test_explicit_missing_config_file_fails() {
        let cli = Cli::parse_from(["remoview", "--config", "/nonexistent/remoview.toml", "config"]);
        assert!(load_config(&cli).is_err());
    }

    #[test]
    fn test_bad_base_url_flag_fails() {
        let cli = Cli::parse_from(["remoview", "--api-base-url", "ftp://nope", "config"]);
        assert!(load_config(&cli).is_err());
    }
}
