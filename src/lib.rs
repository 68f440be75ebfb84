//! # Intro API Library
//!
//! A small demonstration HTTP API built on axum.
//!
//! This library provides components for:
//! - **Request Logging**: A middleware that records every request and its final status
//! - **Static Routes**: Greeting, echo, method and health check endpoints
//! - **Listing Proxy**: Fetches posts from a third-party JSON API and returns them unchanged
//! - **Interactive Docs**: OpenAPI document with Swagger UI and ReDoc pages
//!
//! # Examples
//!
//! ```no_run
//! use std::sync::Arc;
//! use intro_api::{http::build_router, MemoryLog};
//!
//! # async fn example() -> std::io::Result<()> {
//! // Record request log entries in memory instead of printing them
//! let log = Arc::new(MemoryLog::new());
//!
//! // Build HTTP router with state
//! let state = intro_api::http::AppState::builder()
//!     .with_upstream_url("https://jsonplaceholder.typicode.com")
//!     .with_request_log(log.clone())
//!     .build()?;
//! let app = build_router(state);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod http;
pub mod request_log;
pub mod upstream;

// Re-export commonly used types for convenience
pub use error::AppError;
pub use request_log::{LogEntry, MemoryLog, RequestLog, TracingLog};
pub use upstream::PostsClient;
