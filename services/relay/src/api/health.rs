//! Status endpoints.
//!
//! Used by uptime monitors and orchestration probes. None of these handlers
//! touch the delivery cache or the formatter.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::config::PROGRAM;
use crate::state::AppState;

/// Root ping response, kept wire-compatible with existing monitors.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct PingResponse {
    /// Current Unix timestamp in seconds, as a string.
    pub ping: String,

    /// Program identifier.
    pub what: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    /// Service status, always "ok" while the process serves requests.
    pub status: String,

    /// Service name.
    pub service: String,

    /// Service version.
    pub version: String,

    /// Current timestamp (ISO 8601).
    pub timestamp: String,
}

/// Create status routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
}

/// Uptime ping with the program identifier.
async fn root() -> impl IntoResponse {
    Json(PingResponse {
        ping: Utc::now().timestamp().to_string(),
        what: PROGRAM.to_string(),
    })
}

/// Basic health check - is the service running?
async fn healthz() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: PROGRAM.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Liveness check for orchestration probes.
async fn livez() -> impl IntoResponse {
    StatusCode::OK
}
