//! Request log sinks used by the logging middleware.
//!
//! The middleware reports two events per request: one before the handler
//! runs and one after the response has been produced. Where those events
//! end up is decided by the [`RequestLog`] implementation in the state.

pub mod memory;
pub mod tracing_log;

// Re-export main implementations
pub use memory::MemoryLog;
pub use tracing_log::TracingLog;

use axum::http::{Method, StatusCode};

/// Sink for request/response log events.
///
/// Implementations only observe; they never see the request body or the
/// response body and cannot change either.
pub trait RequestLog: Send + Sync {
    /// Record an incoming request before it reaches its handler.
    ///
    /// # Parameters
    ///
    /// - `method` - HTTP method of the request
    /// - `url` - Full URL the client addressed
    fn request_started(&self, method: &Method, url: &str);

    /// Record the status of the response produced for a request.
    ///
    /// # Parameters
    ///
    /// - `method` - HTTP method of the request
    /// - `url` - Full URL the client addressed
    /// - `status` - Status code returned to the client
    fn request_finished(&self, method: &Method, url: &str, status: StatusCode);
}

/// A single event recorded by a [`RequestLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// Logged before the handler runs.
    Request { method: Method, url: String },
    /// Logged after the handler returned its response.
    Response { method: Method, url: String, status: StatusCode },
}

impl LogEntry {
    /// Returns the URL of the request this entry belongs to.
    pub fn url(&self) -> &str {
        match self {
            Self::Request { url, .. } | Self::Response { url, .. } => url,
        }
    }

    /// Returns the recorded status, or `None` for a request entry.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Request { .. } => None,
            Self::Response { status, .. } => Some(*status),
        }
    }
}
