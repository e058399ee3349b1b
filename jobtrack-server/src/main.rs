//! jobtrack - connect the job tracker database and optionally serve it
//!
//! With no subcommand (or `connect`) it resolves the database config,
//! connects, prints a confirmation and exits. `serve` keeps running and
//! exposes the HTTP API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jobtrack_common::config::{default_config_path, resolve_database_config, TomlConfig};
use jobtrack_common::connect_to_db;
use jobtrack_server::JobtrackApp;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for jobtrack
#[derive(Parser, Debug)]
#[command(name = "jobtrack")]
#[command(about = "Job application tracker database host")]
#[command(version)]
struct Args {
    /// Database URL (overrides env and config file)
    #[arg(long, env = "JOBTRACK_DATABASE_URL")]
    database_url: Option<String>,

    /// Path to config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Connect to the database and exit
    Connect,
    /// Connect and serve the HTTP API
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "5780", env = "JOBTRACK_PORT")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(default_config_path);
    let loaded = match &config_path {
        Some(path) => TomlConfig::load_optional(path)?,
        None => None,
    };
    let found = loaded.is_some();
    let toml = loaded.unwrap_or_default();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| toml.logging.level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobtrack v{}", env!("CARGO_PKG_VERSION"));
    match &config_path {
        Some(path) if found => info!("Loaded config file: {}", path.display()),
        Some(path) => warn!("Config file not found: {} (using defaults)", path.display()),
        None => warn!("No config directory available (using defaults)"),
    }

    let db_config = resolve_database_config(args.database_url.as_deref(), &toml);
    let mut app = JobtrackApp::new();
    connect_to_db(&mut app, db_config.clone())
        .await
        .with_context(|| format!("Failed to connect to {}", db_config.database_url))?;

    match args.command.unwrap_or(Command::Connect) {
        Command::Connect => {
            println!("Connected to DB.");
        }
        Command::Serve { port } => {
            let router = app.router()?;
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
            info!("jobtrack listening on http://127.0.0.1:{}", port);
            info!("Health check: http://127.0.0.1:{}/health", port);

            tokio::select! {
                r = axum::serve(listener, router) => {
                    r.context("server ended unexpectedly")?;
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("received ctrl+c interrupt, closing server");
                }
            }
        }
    }

    Ok(())
}
