//! Configuration management for ciac

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Config file used when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

/// Token file name inside the cache directory
const TOKEN_FILE_NAME: &str = "token.json";

/// Account configuration.
///
/// Parsed as YAML, so the JSON `config.json` written for earlier releases
/// loads unchanged. Keys are accepted lower-case or capitalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Login email
    #[serde(default, alias = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Login password; prompted for when absent
    #[serde(default, alias = "Password", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Where the session token is cached
    #[serde(
        default,
        rename = "tokenFile",
        alias = "TokenFile",
        alias = "token_file",
        skip_serializing_if = "Option::is_none"
    )]
    pub token_file: Option<PathBuf>,
}

impl Config {
    /// Resolve the config path: explicit path or `config.json` in the working
    /// directory
    pub fn resolve_path(path: Option<&str>) -> PathBuf {
        PathBuf::from(path.unwrap_or(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from an optional path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path))
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Email to log in with
    pub fn require_email(&self) -> Result<&str> {
        self.email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEmail.into())
    }

    /// Token file: the configured one, or `<cache dir>/ciac/token.json`
    pub fn token_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.token_file {
            return Ok(path.clone());
        }

        let cache_dir = dirs::cache_dir().ok_or(ConfigError::Invalid(
            "Could not determine cache directory; set tokenFile in the config".to_string(),
        ))?;
        Ok(cache_dir.join("ciac").join(TOKEN_FILE_NAME))
    }
}
