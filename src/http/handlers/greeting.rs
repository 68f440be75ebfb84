//! Path parameter example.

use axum::{extract::Path, Json};

use crate::http::types::MessageResponse;

/// Greet the user named in the path.
///
/// # Parameters
///
/// - `name` - Any string, already percent-decoded by the router
///
/// # Returns
///
/// Returns `{"message": "Hello {name}"}`.
pub async fn greeting(Path(name): Path<String>) -> Json<MessageResponse> {
    tracing::info!("Greeting {name}");
    Json(MessageResponse::new(format!("Hello {name}")))
}
