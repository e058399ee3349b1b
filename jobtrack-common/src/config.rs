//! Configuration loading and database URL resolution

use crate::db::DatabaseConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the database URL
pub const DATABASE_URL_ENV: &str = "JOBTRACK_DATABASE_URL";

/// Logging section of the TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Database section of the TOML file
///
/// Every field is optional so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub track_modifications: Option<bool>,
    pub echo: Option<bool>,
    pub max_connections: Option<u32>,
}

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Parse the file if it exists; `None` when there is no file
    ///
    /// Runs before logging is set up, so reporting which case applied is
    /// left to the caller.
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        if path.exists() {
            Self::load(path).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Default config file location: `<config_dir>/jobtrack/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("jobtrack").join("config.toml"))
}

/// Resolve the database configuration
///
/// URL priority:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable `JOBTRACK_DATABASE_URL`
/// 3. TOML config file `[database] url`
/// 4. Compiled default
///
/// The remaining flags come from the TOML file or their defaults.
pub fn resolve_database_config(cli_url: Option<&str>, toml: &TomlConfig) -> DatabaseConfig {
    let defaults = DatabaseConfig::default();
    let section = &toml.database;

    let database_url = if let Some(url) = cli_url {
        url.to_string()
    } else if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
        url
    } else if let Some(url) = &section.url {
        url.clone()
    } else {
        defaults.database_url
    };

    DatabaseConfig {
        database_url,
        track_modifications: section
            .track_modifications
            .unwrap_or(defaults.track_modifications),
        echo: section.echo.unwrap_or(defaults.echo),
        max_connections: section.max_connections.unwrap_or(defaults.max_connections),
    }
}
