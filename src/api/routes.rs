//! HTTP API route definitions.

use std::future::Future;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{echo, health, info as service_info, AppState};
use crate::error::Result;
use crate::metrics::track_requests;
use crate::utils::shutdown_signal;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(health))
        // Metadata endpoint
        .route("/info", get(service_info))
        // Echo endpoint; an empty segment does not match
        .route("/echo/:msg", get(echo))
        .with_state(state)
        .layer(middleware::from_fn(track_requests))
        .layer(TraceLayer::new_for_http())
}

/// Create a minimal health-only router (for probes).
pub fn health_router() -> Router {
    Router::new().route("/health", get(health))
}

/// Serve the API on an already-bound listener until a shutdown signal arrives.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    serve_with_shutdown(listener, state, shutdown_signal()).await
}

/// Serve the API until `signal` resolves, then drain in-flight requests.
pub async fn serve_with_shutdown<F>(listener: TcpListener, state: AppState, signal: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(
        address = %addr,
        environment = %state.environment(),
        "HTTP server listening"
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(signal)
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
