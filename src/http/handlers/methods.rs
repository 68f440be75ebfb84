//! Same path, different methods.

use axum::{http::StatusCode, Json};

use crate::http::types::MessageResponse;

/// `GET /methods`: says hello with status 200.
pub async fn hello_get() -> (StatusCode, Json<MessageResponse>) {
    tracing::info!("GET /methods called - returning Hello");
    (StatusCode::OK, Json(MessageResponse::new("Hello")))
}

/// `POST /methods`: says goodbye with status 500.
///
/// The 500 is a fixed response, not a failure. Request body and headers are
/// ignored.
pub async fn hello_post() -> (StatusCode, Json<MessageResponse>) {
    tracing::info!("POST /methods called - returning Goodbye");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageResponse::new("Goodbye")))
}
