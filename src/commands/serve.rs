//! HTTP server command

use crate::api::{AppState, PlayerResolver, create_router};
use crate::config::{GameService, ServerConfig};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tokio::signal;

/// Serve the game API until Ctrl+C or SIGTERM
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run_server(config: ServerConfig, service: GameService) -> Result<()> {
    let state = AppState::new(service, PlayerResolver::new(config.guest_player.clone()));
    let app = create_router(state);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    match listener.local_addr() {
        Ok(local) => tracing::info!("Listening on {local}"),
        Err(error) => tracing::warn!(%error, "Could not determine local address"),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::warn!(%error, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
