//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/electricity-billing/config.toml`).
//! Every section and field falls back to a default, so a partial file or no
//! file at all is valid. `DATABASE_URL` in the environment wins over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::DatabaseConfig;

/// Environment variable overriding `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default location of the configuration file
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("electricity-billing")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSection,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 10,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSection {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        let db = DatabaseConfig::default();
        Self {
            url: db.url,
            max_connections: db.max_connections,
        }
    }
}

impl From<&DatabaseSection> for DatabaseConfig {
    fn from(s: &DatabaseSection) -> Self {
        Self {
            url: s.url.clone(),
            max_connections: s.max_connections,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. "info" or "electricity_billing=debug"
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Where the effective configuration came from
#[derive(Debug)]
pub enum ConfigOrigin {
    File,
    /// No file at the path; defaults apply
    Missing,
    /// The file could not be read or parsed; defaults apply
    Invalid(ConfigError),
}

impl AppConfig {
    /// Load from `path`, falling back to defaults when the file is absent or
    /// unusable. `database_url` (normally `DATABASE_URL`) is applied on every
    /// path, including the fallback.
    pub fn load(path: &Path, database_url: Option<String>) -> (Self, ConfigOrigin) {
        let (mut cfg, origin) = if path.exists() {
            match Self::read(path) {
                Ok(cfg) => (cfg, ConfigOrigin::File),
                Err(e) => (Self::default(), ConfigOrigin::Invalid(e)),
            }
        } else {
            (Self::default(), ConfigOrigin::Missing)
        };
        cfg.apply_overrides(database_url);
        (cfg, origin)
    }

    /// Read and parse `path` as-is
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Replace the database URL when one is supplied and non-empty
    pub fn apply_overrides(&mut self, database_url: Option<String>) {
        if let Some(url) = database_url.filter(|u| !u.trim().is_empty()) {
            self.database.url = url;
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
