//! API types and parameters for HTTP handlers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of posts fetched when `limit` is not given.
pub const DEFAULT_POSTS_LIMIT: i64 = 5;

/// Query parameters for the `/posts` endpoint.
#[derive(Debug, Deserialize)]
pub struct PostsParams {
    /// Number of posts to fetch
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for PostsParams {
    fn default() -> Self {
        Self { limit: DEFAULT_POSTS_LIMIT }
    }
}

fn default_limit() -> i64 {
    DEFAULT_POSTS_LIMIT
}

/// `{"message": ...}` body used by several endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Health check body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Body returned by `/echo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EchoResponse {
    /// The JSON object the client sent
    pub received: Map<String, Value>,
    pub message: String,
}
