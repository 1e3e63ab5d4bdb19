//! athlos-events server entry point.
//!
//! Starts the Axum HTTP server with REST and WebSocket endpoints.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use athlos_events::app_state::AppState;
use athlos_events::config::{CatalogConfig, LogFormat};
use athlos_events::service::CatalogService;
use athlos_events::{build_app, build_source};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = CatalogConfig::from_env()
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt().json().with_env_filter(filter).init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, "starting athlos-events");

    // Build source and service layer
    let source = build_source(&config)
        .await
        .context("failed to initialise event source")?;
    let catalog_service = CatalogService::new(source);

    // Build router
    let listen_addr = config.listen_addr;
    let app = build_app(AppState::new(catalog_service, config));

    // Start server
    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;
    tracing::info!(addr = %listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
