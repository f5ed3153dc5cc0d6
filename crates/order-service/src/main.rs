//! # Order Service
//!
//! Binary entry point: load [`ServiceConfig`], set up tracing, start the collections and
//! serve the HTTP API until Ctrl-C.

use order_service::api::{self, AppState};
use order_service::config::ServiceConfig;
use order_service::lifecycle::OrderSystem;
use store_framework::tracing::setup_tracing;
use tokio::net::TcpListener;
use tracing::{error, info, Instrument};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(
        addr = %config.addr,
        channel_buffer = config.channel_buffer,
        "Starting order service"
    );

    let system = OrderSystem::new(config.channel_buffer);
    let app = api::router(AppState::from_system(&system));

    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {e}", config.addr))?;

    let span = tracing::info_span!("http_server", addr = %config.addr);
    async {
        info!("Listening");
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Order service stopped");
    Ok(())
}
