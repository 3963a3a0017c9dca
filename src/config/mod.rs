use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
pub const API_URL_ENV: &str = "DISEASE_DETECTOR_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("backend url must start with http:// or https://: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout; unset leaves the transport default.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: None,
        }
    }
}

fn default_url() -> String {
    DEFAULT_API_URL.to_string()
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&text)?;
    Ok(config)
}

/// Builds the effective config: `url_override`, then the
/// `DISEASE_DETECTOR_API_URL` variable, then the file, then defaults.
pub fn resolve_config(
    path: Option<&Path>,
    url_override: Option<&str>,
) -> Result<Config, ConfigError> {
    let env_url = std::env::var(API_URL_ENV).ok();
    resolve_with(path, url_override, env_url.as_deref())
}

fn resolve_with(
    path: Option<&Path>,
    url_override: Option<&str>,
    env_url: Option<&str>,
) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    let chosen = url_override.or(env_url).filter(|u| !u.trim().is_empty());
    if let Some(url) = chosen {
        config.backend.url = url.trim().to_string();
    }

    validate_url(&config.backend.url)?;
    debug!(
        url = %config.backend.url,
        timeout_secs = ?config.backend.timeout_secs,
        "resolved config"
    );
    Ok(config)
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(url.to_string()))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/config/mod.rs"]
mod tests;
