//! Application bootstrap: wires state and router into a running server.

use std::future::IntoFuture;
use std::time::Duration;

use tracing::{info, warn};

use catalogo_core::config::AppConfig;
use catalogo_core::error::{AppError, ErrorKind};
use catalogo_database::DatabasePool;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the Catalogo server with the given configuration and database pool.
///
/// Binds the listener, serves until SIGINT/SIGTERM, then drains in-flight
/// requests for at most `server.shutdown_grace_seconds`.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState::new(config, db);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!("Catalogo server listening on {addr}");

    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = drain_tx.send(());
    });

    // Bounds the drain: once the signal fires, in-flight requests get the
    // grace window and no more.
    let drain_deadline = async move {
        let _ = drain_rx.await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;
            info!("Catalogo server shut down cleanly");
        }
        _ = drain_deadline => {
            warn!(
                grace_seconds = grace.as_secs(),
                "Drain window elapsed; dropping remaining connections"
            );
        }
    }

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
