// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use infrastructure::JsonFileStore;
use ports::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::{debug, info};
use crate::cli::args::Args;
use crate::constants::{DEFAULT_ENV_FILE, ENV_FILE_VAR};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notekeeper with arguments");

    // Initialize infrastructure
    let store = Arc::new(JsonFileStore::new(&args.data_file));

    // Initialize application and presentation
    let app = create_router(AppState::new(store));

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!(%addr, data_file = %args.data_file.display(), "Serving notes");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated with an error")?;

    info!("Server stopped");
    Ok(())
}

/// Load `KEY=value` pairs from the env file into the process environment.
///
/// Variables already set are not overridden. Returns the file that was
/// loaded, or `None` if it does not exist.
pub fn load_env_file() -> Result<Option<PathBuf>> {
    let path = std::env::var_os(ENV_FILE_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

    match dotenvy::from_path(&path) {
        Ok(()) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to load env file {}", path.display())),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
