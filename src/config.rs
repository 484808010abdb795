//! Client configuration — gateway endpoint, credentials, cache location.
//!
//! Precedence: built-in defaults < config file < environment variables.
//! The config file is TOML at `~/.config/fitmarket/config.toml` (or the
//! path given explicitly).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GATEWAY_URL, GATEWAY_TIMEOUT_SECS};
use crate::error::{MarketError, MarketResult};

fn default_gateway_url() -> String {
    DEFAULT_GATEWAY_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    GATEWAY_TIMEOUT_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the marketplace gateway.
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,
    /// Bearer token for authenticated operations. Anonymous reads work
    /// without one.
    pub api_token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Directory holding the local cache database. Defaults to the
    /// platform data dir.
    pub data_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_GATEWAY_URL.to_string(),
            api_token: None,
            timeout_secs: GATEWAY_TIMEOUT_SECS,
            data_dir: None,
        }
    }
}

impl Settings {
    /// Default config file path: `~/.config/fitmarket/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("fitmarket").join("config.toml"))
    }

    /// Load settings with full precedence: defaults, then the config file
    /// (if present), then environment overrides.
    pub fn load(path: Option<&Path>) -> MarketResult<Self> {
        let mut settings = match path.map(PathBuf::from).or_else(Self::default_path) {
            Some(p) if p.exists() => Self::from_file(&p)?,
            _ => Self::default(),
        };
        settings.apply_env();
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> MarketResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| MarketError::InvalidInput(format!("{}: {}", path.display(), e)))
    }

    /// Environment overrides: FITMARKET_GATEWAY_URL, FITMARKET_API_TOKEN,
    /// FITMARKET_TIMEOUT_SECS, FITMARKET_DATA_DIR.
    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("FITMARKET_GATEWAY_URL") {
            if !url.is_empty() {
                self.gateway_url = url;
            }
        }
        if let Ok(token) = std::env::var("FITMARKET_API_TOKEN") {
            if !token.is_empty() {
                self.api_token = Some(token);
            }
        }
        if let Ok(secs) = std::env::var("FITMARKET_TIMEOUT_SECS") {
            if let Ok(v) = secs.parse() {
                self.timeout_secs = v;
            }
        }
        if let Ok(dir) = std::env::var("FITMARKET_DATA_DIR") {
            if !dir.is_empty() {
                self.data_dir = Some(PathBuf::from(dir));
            }
        }
    }

    /// Path of the local cache database.
    pub fn db_path(&self) -> PathBuf {
        let base = self
            .data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join("fitmarket")))
            .unwrap_or_else(|| PathBuf::from(".fitmarket"));
        base.join("programs.db")
    }
}
