//! TOML-based application configuration.
//!
//! Holds the content-provider credentials and the default pet name.
//! Stored at `~/.config/flobi/config.toml`. Everything else in the
//! system is process-lifetime state and is deliberately not persisted.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::garden::state::DEFAULT_PET_NAME;
use crate::provider::gemini::DEFAULT_MODEL;

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_pet_name() -> String {
    DEFAULT_PET_NAME.to_string()
}

/// Content-provider credentials and model selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Gemini API key. Empty means the static offline provider is used.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Override for the API host. `None` uses the hosted endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: None,
        }
    }
}

/// Garden defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GardenConfig {
    #[serde(default = "default_pet_name")]
    pub pet_name: String,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            pet_name: default_pet_name(),
        }
    }
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/flobi/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub garden: GardenConfig,
}

impl Config {
    /// Path to the config file in the platform config directory.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("flobi").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Write the configuration back, creating parent directories.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
                path: path.clone(),
                message: e.to_string(),
            })?;
        }
        let contents = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(path, contents).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load_from(&path).unwrap();
        assert!(config.provider.api_key.is_empty());
        assert_eq!(config.provider.model, DEFAULT_MODEL);
        assert_eq!(config.garden.pet_name, "Flobi");
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.provider.api_key = "test-key".to_string();
        config.garden.pet_name = "Sprouty".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.provider.api_key, "test-key");
        assert_eq!(loaded.garden.pet_name, "Sprouty");
        assert_eq!(loaded.provider.model, DEFAULT_MODEL);
    }

    #[test]
    fn partial_file_uses_field_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[provider]\napi_key = \"k\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.provider.api_key, "k");
        assert_eq!(config.provider.model, DEFAULT_MODEL);
        assert_eq!(config.provider.base_url, None);
        assert_eq!(config.garden.pet_name, "Flobi");
    }

    #[test]
    fn base_url_override_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.provider.base_url = Some("http://localhost:9090".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(
            loaded.provider.base_url.as_deref(),
            Some("http://localhost:9090")
        );
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all {{{").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseFailed(_))
        ));
    }
}
