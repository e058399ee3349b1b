//! Database initialization
//!
//! `connect_to_db` opens the pool, prepares the schema and installs the
//! resulting `Database` handle into the host application. The handle is the
//! only way queries reach the store; nothing here is process-global.

use crate::db::table_schemas::create_all_tables;
use crate::{Error, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use std::str::FromStr;
use tracing::{debug, info};

/// Compiled default connection string
pub const DEFAULT_DATABASE_URL: &str = "sqlite://jobtrack.db?mode=rwc";

/// Connection settings the host hands to `connect_to_db`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Emit a debug event for every insert and delete
    pub track_modifications: bool,
    /// Log every SQL statement
    pub echo: bool,
    /// Pool size for file-backed databases
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            track_modifications: false,
            echo: true,
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// Config for a private in-memory database
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn with_track_modifications(mut self, track: bool) -> Self {
        self.track_modifications = track;
        self
    }

    fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

/// Data-access handle shared by everything that queries the store
///
/// Cloning is cheap; clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    config: DatabaseConfig,
}

impl Database {
    /// Open the pool and create any missing tables
    pub async fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.database_url.starts_with("sqlite:") {
            return Err(Error::Config(format!(
                "Unsupported database URL '{}': expected a sqlite: URL",
                config.database_url
            )));
        }

        let mut options = SqliteConnectOptions::from_str(&config.database_url)?
            .foreign_keys(true)
            .create_if_missing(true);
        options = if config.echo {
            options.log_statements(LevelFilter::Info)
        } else {
            options.disable_statement_logging()
        };

        // Every connection to :memory: is a separate database, so keep
        // exactly one and never recycle it.
        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections.max(1))
        };

        let pool = pool_options.connect_with(options).await?;
        info!("Opened database: {}", config.database_url);

        create_all_tables(&pool).await?;

        Ok(Self { pool, config })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Record an insert or delete when modification tracking is on
    pub(crate) fn track(&self, table: &str, id: i64, action: &str) {
        if self.config.track_modifications {
            debug!(table, id, action, "row modified");
        }
    }

    /// Round-trip a trivial query
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Application context that can hold a database handle
pub trait Host {
    /// Database already attached to this host, if any
    fn database(&self) -> Option<&Database>;

    /// Bind the database handle to this host
    fn attach_database(&mut self, db: Database);
}

/// Connect the database to a host application
///
/// Calling it again with an equal config is a no-op. A different config
/// on a host that already holds a database is a `ConfigConflict`.
/// Connection failures are returned as-is; nothing is retried.
pub async fn connect_to_db<H: Host + ?Sized>(app: &mut H, config: DatabaseConfig) -> Result<()> {
    if let Some(existing) = app.database() {
        if existing.config() == &config {
            debug!("Host already connected to {}", config.database_url);
            return Ok(());
        }
        return Err(Error::ConfigConflict(format!(
            "host is connected to '{}', refusing to rebind to '{}'",
            existing.config().database_url,
            config.database_url
        )));
    }

    let db = Database::open(config).await?;
    app.attach_database(db);
    Ok(())
}
