//! Client configuration.
//!
//! Resolution order: environment variables → config file → defaults.
//!
//! Config file location:
//!   1. $MUSICCLUB_CONFIG (explicit override)
//!   2. $XDG_CONFIG_HOME/musicclub/config.toml
//!   3. ~/.config/musicclub/config.toml
//!
//! A missing file is not an error; every field has a default, and the base
//! endpoint falls back to the local development server.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::wire::WireFormat;

/// Endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const ENV_CONFIG: &str = "MUSICCLUB_CONFIG";
pub const ENV_GRPC_HOST: &str = "MUSICCLUB_GRPC_HOST";
pub const ENV_WIRE_FORMAT: &str = "MUSICCLUB_WIRE_FORMAT";
pub const ENV_TIMEOUT_SECS: &str = "MUSICCLUB_TIMEOUT_SECS";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: EndpointConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base address every service path is appended to.
    pub base_url: String,
    /// Payload encoding.
    pub wire_format: WireFormat,
    /// Per-call timeout in seconds. 0 = none.
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            wire_format: WireFormat::Binary,
            timeout_secs: 30,
        }
    }
}

impl EndpointConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

// ── Path helpers ──────────────────────────────────────────────────────────────

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_or_home().join(".config"))
        .join("musicclub")
}

fn dirs_or_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),
    #[error("failed to parse {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
    #[error("failed to write {0}: {1}")]
    WriteFailed(PathBuf, std::io::Error),
    #[error("failed to serialize: {0}")]
    SerializeFailed(toml::ser::Error),
}

// ── Loading ───────────────────────────────────────────────────────────────────

impl ClientConfig {
    /// Load config: env vars → file → defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_file(&Self::file_path())?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Read one config file. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(ClientConfig::default());
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadFailed(path.to_path_buf(), e))?;
        toml::from_str(&text).map_err(|e| ConfigError::ParseFailed(path.to_path_buf(), e))
    }

    /// Config file path.
    pub fn file_path() -> PathBuf {
        std::env::var(ENV_CONFIG)
            .map(PathBuf::from)
            .unwrap_or_else(|_| config_dir().join("config.toml"))
    }

    /// Write default config if none exists. Returns the path.
    pub fn write_default_if_missing() -> Result<PathBuf, ConfigError> {
        let path = Self::file_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ConfigError::WriteFailed(path.clone(), e))?;
            }
            let text = toml::to_string_pretty(&ClientConfig::default())
                .map_err(ConfigError::SerializeFailed)?;
            std::fs::write(&path, text).map_err(|e| ConfigError::WriteFailed(path.clone(), e))?;
        }
        Ok(path)
    }

    /// Apply MUSICCLUB_* env var overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Blank values count as unset. Unparsable values are ignored with a
    /// warning rather than failing the load.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get(ENV_GRPC_HOST) {
            self.endpoint.base_url = v.trim().to_string();
        }
        if let Some(v) = get(ENV_WIRE_FORMAT) {
            match v.parse() {
                Ok(format) => self.endpoint.wire_format = format,
                Err(e) => tracing::warn!(error = %e, "ignoring {}", ENV_WIRE_FORMAT),
            }
        }
        if let Some(v) = get(ENV_TIMEOUT_SECS) {
            match v.trim().parse() {
                Ok(secs) => self.endpoint.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %v, "ignoring {}", ENV_TIMEOUT_SECS),
            }
        }
    }
}
