//! Readiness handler backed by a real database round-trip.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Readiness check endpoint.
///
/// Issues a `SELECT 1` against PostgreSQL; reports 503 when the database is
/// unreachable so orchestrators hold traffic back.
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    match database::postgres::check_health(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ready", "database": "connected" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Readiness check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "not ready", "database": "disconnected" })),
            )
                .into_response()
        }
    }
}
