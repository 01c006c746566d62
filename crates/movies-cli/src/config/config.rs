//! `AppConfig` struct and TOML read/write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.api_key`.
pub const API_KEY_ENV: &str = "MOVIES_API_KEY";

/// File name of the config inside its directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Movies API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Movies API configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// API base URL. Library default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Poster image base URL. Library default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    /// API key appended to every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl AppConfig {
    /// Locates the config file: `{dir}/config.toml` when `dir` is given,
    /// otherwise `~/.config/movies/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is `None` and `HOME` is not set.
    pub fn locate(dir: Option<&Path>) -> Result<PathBuf> {
        match dir {
            Some(d) => Ok(d.join(CONFIG_FILE_NAME)),
            None => {
                let home =
                    std::env::var("HOME").context("HOME environment variable is not set")?;
                Ok(Self::default_location(Path::new(&home)))
            }
        }
    }

    /// Default config location under `home`.
    fn default_location(home: &Path) -> PathBuf {
        home.join(".config").join("movies").join(CONFIG_FILE_NAME)
    }

    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }

    /// Applies the environment override for the API key.
    #[must_use]
    pub fn with_env_overrides(mut self, env_api_key: Option<String>) -> Self {
        if let Some(key) = env_api_key.filter(|k| !k.is_empty()) {
            self.api.api_key = Some(key);
        }
        self
    }
}
