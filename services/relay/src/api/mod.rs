//! HTTP API handlers and routing.

pub mod error;
mod health;
pub mod webhook;

use axum::{http::Request, Router};
use tower_http::trace::TraceLayer;

use crate::delivery::Destination;
use crate::state::AppState;

/// Path prefix of webhook intake URLs; the rest of the path is a credential.
const SLACK_PATH_PREFIX: &str = "/slack/";

/// Create the router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Status endpoints (never touch the dispatcher)
        .merge(health::routes())
        // Webhook intake
        .merge(webhook::routes())
        // Logging layer: method + redacted path, never the destination token
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %loggable_path(request.uri().path()),
                )
            }),
        )
        // Application state
        .with_state(state)
}

/// The request path with any destination token redacted.
fn loggable_path(path: &str) -> String {
    match path.strip_prefix(SLACK_PATH_PREFIX) {
        Some(token) => format!("{SLACK_PATH_PREFIX}{}", Destination::new(token).redacted()),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loggable_path_redacts_destination() {
        let path = loggable_path("/slack/T000/B000/secret");

        assert_eq!(path, "/slack/T000/***");
        assert!(!path.contains("secret"));
        assert!(!loggable_path("/slack/secret").contains("secret"));
    }

    #[test]
    fn test_loggable_path_keeps_other_paths() {
        assert_eq!(loggable_path("/healthz"), "/healthz");
        assert_eq!(loggable_path("/"), "/");
    }
}
