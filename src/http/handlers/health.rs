//! Health check handler.

use axum::Json;

use crate::http::types::StatusResponse;

/// Health check endpoint.
///
/// # Returns
///
/// Always returns `{"status": "ALIVE"}`.
pub async fn ping() -> Json<StatusResponse> {
    tracing::info!("Ping! Server is alive");
    Json(StatusResponse { status: "ALIVE".to_string() })
}
