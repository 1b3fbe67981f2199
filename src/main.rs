//! Boruto HTTP server entry point
//!
//! Starts the REST API server for the heroes catalog.

use std::sync::Arc;

use clap::Parser;

use boruto::cli::Cli;
use boruto::core::services::Services;
use boruto::http;
use boruto::logging::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration before logging so the format can be chosen
    let config = cli.load_config()?;
    init_tracing(&config.logging);

    tracing::info!("Starting Boruto heroes API");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    config.log_config();

    // Build the catalog once and share it with every handler
    let services = Arc::new(Services::new(&config)?);
    let app = http::build_router(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
