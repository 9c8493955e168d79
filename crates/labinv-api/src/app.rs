//! Application builder: wires router, middleware, and state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use labinv_core::config::AppConfig;
use labinv_core::error::AppError;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::session::SessionRegistry;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(build_compression_layer())
        .layer(cors)
}

/// Runs the LabInv server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting LabInv server...");
    info!(
        persistence = %config.persistence.provider,
        link_code_cache = %config.link_code.cache.provider,
        public_url = %config.server.public_url,
        "Initializing services"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let idle = Duration::from_secs(config.session.idle_timeout_minutes * 60);
    let sweep = Duration::from_secs(config.session.sweep_interval_seconds.max(1));

    let state = AppState::from_config(config).await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let reaper = spawn_session_reaper(
        Arc::clone(&state.sessions),
        idle,
        sweep,
        shutdown_rx.clone(),
    );

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("LabInv server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });
    let mut server = tokio::spawn(async move { server.await });

    let mut grace_rx = shutdown_rx;
    let result = tokio::select! {
        joined = &mut server => joined
            .map_err(|e| AppError::internal(format!("Server task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Server error: {e}"))),
        _ = async {
            let _ = grace_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed, dropping open connections");
            server.abort();
            Ok(())
        }
    };

    reaper.abort();
    info!("LabInv server stopped");
    result
}

/// Periodically drops sessions idle for longer than `idle`.
///
/// With a durable store the snapshots stay behind so a returning client is
/// restored on its next request. Memory snapshots are dropped with the session.
pub fn spawn_session_reaper(
    sessions: Arc<SessionRegistry>,
    idle: Duration,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let reaped = sessions.reap_idle(idle).await;
                    if reaped > 0 {
                        info!(reaped, live = sessions.len(), "Reaped idle sessions");
                    }
                }
                _ = shutdown.changed() => {
                    debug!("Session reaper stopping");
                    break;
                }
            }
        }
    })
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
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
