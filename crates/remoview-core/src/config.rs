use crate::error::{RemoviewError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_DATA_DIR: &str = ".remoview";
pub const DEFAULT_HISTORY_FILE: &str = "history.json";
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Environment variables consulted for the API key, in order
pub const API_KEY_ENV_VARS: [&str; 2] = ["REMOVIEW_API_KEY", "API_KEY"];

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for RemoView
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub api_key: ConfigValue<Option<String>>,
    pub model: ConfigValue<String>,
    pub api_base_url: ConfigValue<String>,
    pub history_path: ConfigValue<PathBuf>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            api_key: ConfigValue::new(None, ConfigSource::Default),
            model: ConfigValue::new(DEFAULT_MODEL.to_string(), ConfigSource::Default),
            api_base_url: ConfigValue::new(
                DEFAULT_API_BASE_URL.to_string(),
                ConfigSource::Default,
            ),
            history_path: ConfigValue::new(
                Path::new(DEFAULT_DATA_DIR).join(DEFAULT_HISTORY_FILE),
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| RemoviewError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| RemoviewError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_key) = file_config.api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key.update(Some(api_key), ConfigSource::File);
        }

        if let Some(model) = file_config.model {
            self.model.update(model, ConfigSource::File);
        }

        if let Some(base_url) = file_config.api_base_url {
            self.api_base_url.update(parse_base_url(&base_url)?, ConfigSource::File);
        }

        if let Some(history_path) = file_config.history_path {
            self.history_path.update(history_path, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from a TOML file when it exists; a missing file is not an error
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // REMOVIEW_API_KEY, falling back to API_KEY
        if let Some(api_key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty())
        {
            self.api_key.update(Some(api_key), ConfigSource::Environment);
        }

        // REMOVIEW_MODEL
        if let Ok(model) = env::var("REMOVIEW_MODEL") {
            if !model.trim().is_empty() {
                self.model.update(model, ConfigSource::Environment);
            }
        }

        // REMOVIEW_API_BASE_URL
        if let Ok(base_url) = env::var("REMOVIEW_API_BASE_URL") {
            match parse_base_url(&base_url) {
                Ok(url) => self.api_base_url.update(url, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid REMOVIEW_API_BASE_URL value '{}': expected an http(s) URL",
                    base_url
                ),
            }
        }

        // REMOVIEW_HISTORY_PATH
        if let Ok(history_path) = env::var("REMOVIEW_HISTORY_PATH") {
            if !history_path.trim().is_empty() {
                self.history_path.update(PathBuf::from(history_path), ConfigSource::Environment);
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(api_key) = overrides.api_key {
            self.api_key.update(Some(api_key), ConfigSource::Cli);
        }

        if let Some(model) = overrides.model {
            self.model.update(model, ConfigSource::Cli);
        }

        if let Some(base_url) = overrides.api_base_url {
            self.api_base_url.update(base_url, ConfigSource::Cli);
        }

        if let Some(history_path) = overrides.history_path {
            self.history_path.update(history_path, ConfigSource::Cli);
        }
    }

    /// Log a warning when no API key is configured.
    ///
    /// A missing key is not fatal here; it fails once a generator is built.
    pub fn warn_on_missing_credentials(&self) {
        if self.api_key.value.is_none() {
            tracing::warn!(
                "API key is not set. Set REMOVIEW_API_KEY (or API_KEY) to play sessions."
            );
        }
    }

    /// The configured API key, or `ConfigMissing`
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.value.as_deref().ok_or_else(|| RemoviewError::ConfigMissing {
            key: "api_key".to_string(),
        })
    }

    /// Get all configuration values as a map for inspection. The API key is masked.
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        let api_key = match &self.api_key.value {
            Some(key) => mask_secret(key),
            None => "(not set)".to_string(),
        };
        map.insert("api_key".to_string(), (api_key, self.api_key.source));

        map.insert("model".to_string(), (self.model.value.clone(), self.model.source));

        map.insert(
            "api_base_url".to_string(),
            (self.api_base_url.value.clone(), self.api_base_url.source),
        );

        map.insert(
            "history_path".to_string(),
            (self.history_path.value.display().to_string(), self.history_path.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_key: Option<String>,
    model: Option<String>,
    api_base_url: Option<String>,
    history_path: Option<PathBuf>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub api_base_url: Option<String>,
    pub history_path: Option<PathBuf>,
}

/// Parse an API base URL, dropping any trailing slash
pub fn parse_base_url(s: &str) -> Result<String> {
    let trimmed = s.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(RemoviewError::ConfigInvalid {
            key: "api_base_url".to_string(),
            reason: format!("Invalid base URL: {}. Use an http:// or https:// URL", s),
        })
    }
}

/// Keep the first four characters of a secret
pub fn mask_secret(secret: &str) -> String {
    let visible: String = secret.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.api_key.value, None);
        assert_eq!(config.model.value, "gemini-2.5-flash");
        assert_eq!(config.model.source, ConfigSource::Default);
        assert_eq!(config.history_path.value, PathBuf::from(".remoview/history.json"));
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new("a", ConfigSource::Default);

        value.update("b", ConfigSource::File);
        assert_eq!(value.value, "b");

        value.update("c", ConfigSource::Cli);
        assert_eq!(value.value, "c");

        // Lower precedence should not override
        value.update("d", ConfigSource::Environment);
        assert_eq!(value.value, "c");
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_key = "file-key"
model = "gemini-2.5-pro"
api_base_url = "http://localhost:8080/v1beta/"
history_path = "/tmp/remoview-history.json"
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.api_key.value.as_deref(), Some("file-key"));
        assert_eq!(config.api_key.source, ConfigSource::File);
        assert_eq!(config.model.value, "gemini-2.5-pro");
        assert_eq!(config.api_base_url.value, "http://localhost:8080/v1beta");
        assert_eq!(config.history_path.value, PathBuf::from("/tmp/remoview-history.json"));
    }

    #[test]
    fn test_load_from_file_rejects_bad_url() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"api_base_url = "ftp://example.com""#).unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(RemoviewError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_optional_file_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let config = LayeredConfig::with_defaults()
            .load_from_optional_file(dir.path().join("absent.toml"))
            .unwrap();
        assert_eq!(config.model.source, ConfigSource::Default);
    }

    #[test]
    fn test_require_api_key() {
        let mut config = LayeredConfig::with_defaults();
        assert!(matches!(
            config.require_api_key(),
            Err(RemoviewError::ConfigMissing { .. })
        ));

        config.update_from_cli(CliConfigOverrides {
            api_key: Some("cli-key".to_string()),
            ..Default::default()
        });
        assert_eq!(config.require_api_key().unwrap(), "cli-key");
    }

    #[test]
    fn test_inspection_map_masks_key() {
        let mut config = LayeredConfig::with_defaults();
        config.update_from_cli(CliConfigOverrides {
            api_key: Some("AIzaSecretValue".to_string()),
            ..Default::default()
        });

        let map = config.to_inspection_map();
        let (key, source) = &map["api_key"];
        assert_eq!(key, "AIza****");
        assert_eq!(*source, ConfigSource::Cli);
        assert!(map.contains_key("model"));
        assert!(map.contains_key("api_base_url"));
        assert!(map.contains_key("history_path"));
    }
}
