//! Echo a JSON object back to the caller.

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap},
    Json,
};
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::http::types::EchoResponse;

/// Receive a JSON object and echo it back.
///
/// A body without a `Content-Type` header is read as JSON.
///
/// # Parameters
///
/// - `headers` - Request headers, checked for the content type
/// - `body` - Raw request body; must be a JSON object
///
/// # Returns
///
/// Returns `{"received": <body>, "message": "Data received!"}`.
///
/// # Errors
///
/// Returns `AppError::InvalidBody` if the content type is not JSON, or the
/// body is empty, malformed, or not an object.
pub async fn echo(headers: HeaderMap, body: Bytes) -> Result<Json<EchoResponse>, AppError> {
    if !accepts_json(&headers) {
        return Err(AppError::InvalidBody(
            "Expected request with `Content-Type: application/json`".to_string(),
        ));
    }

    let received: Map<String, Value> =
        serde_json::from_slice(&body).map_err(|e| AppError::InvalidBody(e.to_string()))?;

    let shown = Value::Object(received.clone());
    tracing::info!("Received data: {shown}");

    Ok(Json(EchoResponse { received, message: "Data received!".to_string() }))
}

/// Absent, `application/json` and `application/*+json` all count as JSON.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return true;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match mime.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
