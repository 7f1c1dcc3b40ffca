//! Configuration management for promoadmin

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Backend used when neither the flag, the environment nor the file set one
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Mount point of the console routes
pub const DEFAULT_BASE_PATH: &str = "/admin";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Promotion backend base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Base path the console routes are mounted under
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Currency label appended to prices in pretty output
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "zł".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            currency: default_currency(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".promoadmin").join("config.yaml"))
    }

    /// Resolve the config file path from an optional override
    pub fn resolve_path(config_path: Option<&str>) -> Result<PathBuf> {
        match config_path {
            Some(path) => Ok(PathBuf::from(path)),
            None => Self::default_path(),
        }
    }

    /// Directory holding the config file and the persisted credential token
    pub fn state_dir(config_path: Option<&str>) -> Result<PathBuf> {
        let path = Self::resolve_path(config_path)?;
        Ok(path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_at(config_path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(config_path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        Ok(())
    }

    /// Resolve the backend URL: override (flag or env) > file > default
    pub fn api_url(&self, override_url: Option<&str>) -> String {
        override_url
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// Base path with a leading slash and no trailing slash
    pub fn base_path(&self) -> String {
        let raw = self.base_path.as_deref().unwrap_or(DEFAULT_BASE_PATH);
        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }
}
