//! Client for the third-party posts service behind `GET /posts`.

use reqwest::Url;
use serde_json::Value;

use crate::error::AppError;

/// Default base URL of the posts service.
pub const DEFAULT_UPSTREAM_URL: &str = "https://jsonplaceholder.typicode.com";

/// Thin wrapper around a `reqwest::Client` bound to one base URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PostsClient {
    /// Create a client for the posts service at `base_url`.
    ///
    /// # Parameters
    ///
    /// - `client` - Configured HTTP client (timeouts, TLS)
    /// - `base_url` - Base URL of the service, e.g. `https://jsonplaceholder.typicode.com`
    ///
    /// # Returns
    ///
    /// Returns a new `PostsClient`.
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the posts collection, without query parameters.
    pub fn posts_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("posts");
        }
        url
    }

    /// Fetch up to `limit` posts.
    ///
    /// The upstream decides how to treat zero or negative limits; the value
    /// is passed through as `_limit`. The JSON array is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Upstream` if the request fails or the body is not
    /// a JSON array.
    pub async fn fetch_posts(&self, limit: i64) -> Result<Vec<Value>, AppError> {
        let posts = self
            .client
            .get(self.posts_url())
            .query(&[("_limit", limit)])
            .send()
            .await?
            .json::<Vec<Value>>()
            .await?;
        Ok(posts)
    }
}
