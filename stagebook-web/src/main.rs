//! Stagebook web server - entry point
//!
//! Resolves configuration, opens the SQLite database and serves the booking
//! site until Ctrl+C or SIGTERM.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stagebook_common::config::{Config, ConfigOverrides};
use stagebook_common::db::init_database;
use stagebook_web::{build_router, logging, AppState};
use tokio::signal;
use tracing::{error, info};

/// Command-line arguments for stagebook-web
#[derive(Parser, Debug)]
#[command(name = "stagebook-web")]
#[command(about = "Venue, artist and show booking site")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "STAGEBOOK_CONFIG")]
    config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long, env = "STAGEBOOK_DATABASE")]
    database: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "STAGEBOOK_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "STAGEBOOK_PORT")]
    port: Option<u16>,

    /// Log level for stagebook crates (overridden by RUST_LOG)
    #[arg(long, env = "STAGEBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Also write log output to this file
    #[arg(long, env = "STAGEBOOK_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            config_file: args.config,
            database_path: args.database,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            log_file: args.log_file,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.into()).context("Failed to load configuration")?;

    let _log_guard = logging::init(&config).context("Failed to initialize logging")?;

    info!(
        "Starting Stagebook v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Database: {}", config.database_path.display());
    if let Some(path) = &config.log_file {
        info!("Log file: {}", path.display());
    }

    let pool = init_database(&config.database_path)
        .await
        .context("Failed to initialize database")?;

    let app = build_router(AppState::new(pool));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
