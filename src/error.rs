//! Errors returned by HTTP handlers.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Outbound call failed or returned something other than a JSON array.
    #[error("upstream: {0}")]
    Upstream(#[from] reqwest::Error),
    /// Upstream returned a post without the fields the summary needs.
    #[error("malformed post {index}: {reason}")]
    MalformedPost { index: usize, reason: String },
    /// Query string could not be coerced into the expected parameters.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// Request body is missing, not JSON, or not a JSON object.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Upstream(_) | Self::MalformedPost { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidQuery(_) | Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Upstream(err) => {
                tracing::error!("upstream request failed: {err}");
                (status, "Internal Server Error").into_response()
            }
            Self::MalformedPost { index, reason } => {
                tracing::error!("malformed post {index} from upstream: {reason}");
                (status, "Internal Server Error").into_response()
            }
            Self::InvalidQuery(detail) | Self::InvalidBody(detail) => {
                (status, Json(serde_json::json!({ "detail": detail }))).into_response()
            }
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}
