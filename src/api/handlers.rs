//! HTTP API handlers.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use std::sync::Arc;

use crate::config::Config;

/// Application name reported by `/info`.
pub const APP_NAME: &str = "gke-flask-api";
/// Application version reported by `/info`.
pub const APP_VERSION: &str = "1.0";
/// Path prefix of the echo route; the rest of the path is the message.
pub const ECHO_PREFIX: &str = "/echo/";

/// Application state shared with handlers.
///
/// Read-only: every request sees the same configuration snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Process-wide configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Deployment environment name.
    pub fn environment(&self) -> &str {
        &self.config.env
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Status: "ok".
    pub status: &'static str,
}

/// Static service metadata.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    /// Application name.
    pub app: &'static str,
    /// Application version.
    pub version: &'static str,
    /// Deployment environment.
    pub environment: String,
}

/// Echo response.
#[derive(Debug, Serialize)]
pub struct EchoResult {
    /// The decoded path segment, verbatim.
    pub you_said: String,
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    Json(HealthStatus { status: "ok" })
}

/// Info handler - app name, version and environment.
pub async fn info(State(state): State<AppState>) -> impl IntoResponse {
    Json(ServiceInfo {
        app: APP_NAME,
        version: APP_VERSION,
        environment: state.environment().to_owned(),
    })
}

/// Echo handler - returns the path segment after percent-decoding.
///
/// The segment is taken from the raw request path and decoded exactly once.
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
/// request. An empty segment is treated as a non-match.
pub async fn echo(uri: Uri) -> Response {
    let raw = uri.path().strip_prefix(ECHO_PREFIX).unwrap_or_default();
    if raw.is_empty() {
        return StatusCode::NOT_FOUND.into_response();
    }

    let msg = decode_segment(raw);
    tracing::debug!(len = msg.len(), "echo");
    Json(EchoResult { you_said: msg }).into_response()
}

/// Percent-decode one path segment, replacing invalid UTF-8.
fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
