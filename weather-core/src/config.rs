use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::WeatherError, query::Units};

/// OpenWeather credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// units = "imperial"
///
/// [openweather]
/// api_key = "..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional default unit system, "metric" or "imperial".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openweather: Option<ProviderConfig>,
}

impl Config {
    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load(path: &Path) -> Result<Self, WeatherError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|source| WeatherError::ConfigRead { path: path.to_owned(), source })?;

        let cfg: Config = toml::from_str(&contents)
            .map_err(|source| WeatherError::ConfigParse { path: path.to_owned(), source })?;

        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), WeatherError> {
        let write_err = |reason: String| WeatherError::ConfigWrite { path: path.to_owned(), reason };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
        }

        let toml = toml::to_string_pretty(self).map_err(|e| write_err(e.to_string()))?;
        fs::write(path, toml).map_err(|e| write_err(e.to_string()))?;

        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Path to the config file in the platform config directory.
    pub fn config_file_path() -> Result<PathBuf, WeatherError> {
        let dirs = ProjectDirs::from("dev", "weather", "weather").ok_or(WeatherError::ConfigDir)?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set/replace the OpenWeather API key.
    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather = Some(ProviderConfig { api_key });
    }

    /// Returns the API key, if a non-blank one is present.
    pub fn api_key(&self) -> Option<&str> {
        self.openweather
            .as_ref()
            .map(|cfg| cfg.api_key.trim())
            .filter(|key| !key.is_empty())
    }

    /// The API key, or an error pointing at the file it should live in.
    pub fn require_api_key(&self, path: &Path) -> Result<&str, WeatherError> {
        self.api_key().ok_or_else(|| WeatherError::MissingApiKey { path: path.to_owned() })
    }

    /// Configured default unit system, metric when unset.
    pub fn default_units(&self) -> Result<Units, WeatherError> {
        self.units.as_deref().map_or(Ok(Units::Metric), Units::try_from)
    }
}
