//! Landing page describing the available endpoints.

use axum::Json;
use serde_json::{json, Value};

/// Home endpoint.
///
/// # Returns
///
/// Returns a welcome message and a map of endpoint paths to descriptions.
pub async fn home() -> Json<Value> {
    tracing::info!("Home endpoint called!");

    Json(json!({
        "message": "Welcome to FastAPI introduction!",
        "endpoints": {
            "/": "This page",
            "/posts?limit=5": "Fetch posts from JSONPlaceholder",
            "/methods": "GET endpoint that says Hello",
            "/greeting/{name}": "Personal greeting",
            "/ping": "Health check",
            "/docs": "Interactive API documentation (Swagger)",
            "/redoc": "API documentation (ReDoc)"
        }
    }))
}
