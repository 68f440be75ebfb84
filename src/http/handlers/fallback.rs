//! Fallback for unmatched paths.

use axum::{http::StatusCode, Json};

/// Respond to any unrouted path with `404 {"detail": "Not Found"}`.
pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "detail": "Not Found" })))
}
