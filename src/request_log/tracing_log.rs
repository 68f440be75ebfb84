//! Request log that writes human-readable lines through `tracing`.

use axum::http::{Method, StatusCode};
use tracing::info;

use crate::request_log::RequestLog;

/// Line drawn around each request/response block.
pub const SEPARATOR: &str = "==================================================";

/// Default request log: one framed block per request and one per response.
///
/// ```text
/// ==================================================
/// Incoming request: GET http://localhost:8000/ping
/// ==================================================
/// Response status: 200
/// ==================================================
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl TracingLog {
    /// Create a new tracing-backed request log.
    pub fn new() -> Self {
        Self
    }
}

impl RequestLog for TracingLog {
    fn request_started(&self, method: &Method, url: &str) {
        info!("{SEPARATOR}");
        info!("Incoming request: {method} {url}");
        info!("{SEPARATOR}");
    }

    fn request_finished(&self, _method: &Method, _url: &str, status: StatusCode) {
        info!("Response status: {}", status.as_u16());
        info!("{SEPARATOR}");
    }
}
