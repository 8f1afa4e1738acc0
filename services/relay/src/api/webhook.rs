//! Webhook intake.
//!
//! `POST /slack/{alpha}/{beta}/{gamma}` relays the body to the Slack
//! incoming webhook named by the three path segments.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use bytes::Bytes;

use crate::api::error::ApiError;
use crate::delivery::Destination;
use crate::dispatch::DispatchOutcome;
use crate::state::AppState;

/// Response header set when a delivery is suppressed as a duplicate.
pub const HEADER_PROCESSING_STATUS: &str = "x-processing-status";

/// Value of [`HEADER_PROCESSING_STATUS`] for duplicates.
pub const SKIPPED_ALREADY_PROCESSED: &str = "skipped;already-processed";

/// Create webhook routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/slack/{alpha}/{beta}/{gamma}", post(slack))
}

async fn slack(
    State(state): State<AppState>,
    Path((alpha, beta, gamma)): Path<(String, String, String)>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let destination = Destination::from_segments(&[alpha, beta, gamma]);

    let response = match state.dispatcher().dispatch(&destination, &body).await? {
        DispatchOutcome::Delivered(text) | DispatchOutcome::DryRun(text) => {
            (StatusCode::OK, text).into_response()
        }
        DispatchOutcome::Duplicate => (
            StatusCode::OK,
            [(HEADER_PROCESSING_STATUS, SKIPPED_ALREADY_PROCESSED)],
        )
            .into_response(),
    };

    Ok(response)
}
