//! HTTP routing configuration for all API endpoints.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::http::handlers::*;
use crate::http::middleware::log_requests;
use crate::http::state::AppState;

/// Build the Axum router with all API endpoints.
///
/// The logging middleware wraps every route, the docs pages and the
/// not-found fallback.
///
/// # Parameters
///
/// - `state` - Application state containing the posts client and request log
///
/// # Returns
///
/// Returns configured Axum `Router`.
pub fn build_router(state: AppState) -> Router {
    let request_log = state.request_log.clone();

    Router::new()
        .route("/", get(home))
        .route("/posts", get(posts))
        .route("/methods", get(hello_get).post(hello_post))
        .route("/greeting/{name}", get(greeting))
        .route("/ping", get(ping))
        .route("/echo", post(echo))
        // Interactive documentation
        .route("/openapi.json", get(openapi))
        .route("/docs", get(swagger_ui))
        .route("/redoc", get(redoc))
        .fallback(not_found)
        .layer(from_fn_with_state(request_log, log_requests))
        .with_state(state)
}
