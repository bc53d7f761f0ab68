//! HTTP server initialization and runtime setup.
//!
//! Handles storage preparation, state wiring, and the Axum server lifecycle.

use crate::application::services::{CollectorService, StatsService};
use crate::config::Config;
use crate::domain::repositories::DomainSetRepository;
use crate::infrastructure::persistence::FileDomainSetRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::uptime::format_uptime;

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Output file parent directory
/// - Flat-file repository and collector service
/// - Statistics seeded with the persisted item count
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - The persisted set cannot be read
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    prepare_output_dir(&config.output_file).await?;

    let repository = Arc::new(FileDomainSetRepository::new(&config.output_file));

    let existing = repository
        .load()
        .await
        .context("Failed to read the persisted domain set")?
        .len();
    let stats = Arc::new(StatsService::new(existing as u64));
    let collector = Arc::new(CollectorService::new(repository, stats.clone()));

    let output_path = std::path::absolute(&config.output_file)
        .unwrap_or_else(|_| config.output_file.clone());
    tracing::info!("Output file: {}", output_path.display());
    tracing::info!("Existing domains: {existing}");

    let state = AppState::new(collector, stats.clone(), config.max_body_bytes);
    let app = app_router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let snapshot = stats.snapshot();
    tracing::info!(
        uptime = %format_uptime(snapshot.uptime),
        requests = snapshot.requests,
        total_received = snapshot.total_received,
        unique_domains = snapshot.unique_domains,
        "Server stopped"
    );

    Ok(())
}

async fn prepare_output_dir(output_file: &Path) -> Result<()> {
    if let Some(parent) = output_file.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
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
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
