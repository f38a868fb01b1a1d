//! Configuration module for catalog-search
//!
//! Manages output defaults, the session state location and per-type registry
//! overrides. Configuration is stored as TOML in the user's config directory
//! and may be overridden by `CATALOG_SEARCH_*` environment variables.
//!
//! ```toml
//! quiet = false
//! output_format = "text"
//! state_file = "/home/me/.local/share/catalog-search/session.json"
//!
//! [registry.Model]
//! has_variants = true
//!
//! [registry.User]
//! enabled = false
//! ```

mod setup;

pub use setup::interactive_setup;

use crate::resource::{DescriptorOverride, Registry, ResourceError};
use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `config set` and `config get`
pub const SETTABLE_KEYS: [&str; 3] = ["quiet", "output_format", "state_file"];

/// How results and listings are printed
#[derive(ValueEnum, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Where session state (tag filters, active variants) is kept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,

    /// Per-resource-type registry overrides, keyed by type name
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub registry: HashMap<String, DescriptorOverride>,
}

impl CatalogConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("catalog-search").join("config.toml"))
    }

    /// Default location of the session state file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_state_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;

        Ok(data_dir.join("catalog-search").join("session.json"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file yields the default configuration; nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, then apply environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("CATALOG_SEARCH").try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolved session state path
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no state file is configured and the default
    /// location cannot be determined.
    pub fn state_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.state_file {
            Some(path) => Ok(path.clone()),
            None => Self::default_state_path(),
        }
    }

    /// Resource-type registry with this configuration's overrides applied
    ///
    /// # Errors
    ///
    /// Returns `ResourceError` if an override names an unknown type.
    pub fn registry(&self) -> Result<Registry, ResourceError> {
        Registry::with_overrides(&self.registry)
    }

    /// Update a setting from its string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => {
                self.quiet = value.parse().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for quiet: '{value}'. Use 'true' or 'false'"))
                })?;
            }
            "output_format" => {
                self.output_format = OutputFormat::from_str(value, true).map_err(|_| {
                    ConfigError::Message(format!("Invalid value for output_format: '{value}'. Use 'text' or 'json'"))
                })?;
            }
            "state_file" => {
                self.state_file = if value.is_empty() { None } else { Some(PathBuf::from(value)) };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Read a setting in its string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "quiet" => Ok(self.quiet.to_string()),
            "output_format" => Ok(match self.output_format {
                OutputFormat::Text => "text".to_string(),
                OutputFormat::Json => "json".to_string(),
            }),
            "state_file" => Ok(self
                .state_file
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_default()),
            _ => Err(unknown_key(key)),
        }
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        SETTABLE_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::{ResourceType, TypeRegistry};

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert!(!config.quiet);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.state_file.is_none());
        assert!(config.registry.is_empty());
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(config.registry.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CatalogConfig {
            output_format: OutputFormat::Json,
            state_file: Some(PathBuf::from("/tmp/session.json")),
            ..Default::default()
        };
        config.registry.insert(
            "Model".to_string(),
            DescriptorOverride {
                has_variants: Some(true),
                ..Default::default()
            },
        );
        config.save_to(&path).unwrap();

        let loaded = CatalogConfig::load_from(&path).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Json);
        assert_eq!(loaded.state_file, Some(PathBuf::from("/tmp/session.json")));
        let registry = loaded.registry().unwrap();
        assert!(registry.descriptor(ResourceType::Model).unwrap().has_variants);
    }

    #[test]
    fn test_registry_overrides_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[registry.user]\nenabled = false\n\n[registry.training-set]\nurl_path = \"sets\"\n",
        )
        .unwrap();

        let config = CatalogConfig::load_from(&path).unwrap();
        let registry = config.registry().unwrap();
        assert!(registry.descriptor(ResourceType::User).is_none());
        assert_eq!(
            registry
                .descriptor(ResourceType::TrainingSet)
                .unwrap()
                .url_path_resource("gold"),
            "/sets/gold"
        );
    }

    #[test]
    fn test_set_and_get_values() {
        let mut config = CatalogConfig::default();

        config.set_value("quiet", "true").unwrap();
        config.set_value("output_format", "JSON").unwrap();
        config.set_value("state_file", "/tmp/s.json").unwrap();

        assert_eq!(config.get_value("quiet").unwrap(), "true");
        assert_eq!(config.get_value("output_format").unwrap(), "json");
        assert_eq!(config.get_value("state_file").unwrap(), "/tmp/s.json");

        config.set_value("state_file", "").unwrap();
        assert!(config.state_file.is_none());
    }

    #[test]
    fn test_set_invalid_values() {
        let mut config = CatalogConfig::default();
        assert!(config.set_value("quiet", "maybe").is_err());
        assert!(config.set_value("output_format", "xml").is_err());

        let err = config.set_value("colour", "red").unwrap_err();
        assert!(err.to_string().contains("Available keys"));
        assert!(config.get_value("colour").is_err());
    }

    #[test]
    fn test_state_path_prefers_configured() {
        let config = CatalogConfig {
            state_file: Some(PathBuf::from("/srv/state.json")),
            ..Default::default()
        };
        assert_eq!(config.state_path().unwrap(), PathBuf::from("/srv/state.json"));
    }
}
