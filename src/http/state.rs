//! Application state and configuration for the HTTP server.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::request_log::{RequestLog, TracingLog};
use crate::upstream::{PostsClient, DEFAULT_UPSTREAM_URL};

/// Application state shared across all HTTP handlers.
///
/// Built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Client for the posts service behind `/posts`
    pub posts: PostsClient,
    /// Sink for the logging middleware
    pub request_log: Arc<dyn RequestLog>,
}

impl AppState {
    /// Create new application state.
    ///
    /// # Parameters
    ///
    /// - `posts` - Client for the posts service
    /// - `request_log` - Sink the logging middleware writes to
    ///
    /// # Returns
    ///
    /// Returns configured `AppState` instance.
    pub fn new(posts: PostsClient, request_log: Arc<dyn RequestLog>) -> Self {
        Self { posts, request_log }
    }

    /// Get a builder for configuring application state step by step.
    ///
    /// # Returns
    ///
    /// Returns an `AppStateBuilder` for fluent configuration.
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::new()
    }
}

/// Builder for constructing AppState with fluent interface.
#[derive(Default)]
pub struct AppStateBuilder {
    upstream_url: Option<String>,
    upstream_timeout: Option<Duration>,
    request_log: Option<Arc<dyn RequestLog>>,
}

impl AppStateBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the posts service.
    ///
    /// # Parameters
    ///
    /// - `url` - Base URL, e.g. `https://jsonplaceholder.typicode.com`
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = Some(url.into());
        self
    }

    /// Set a timeout for outbound calls. Without one, a hung upstream
    /// blocks the request indefinitely.
    ///
    /// # Parameters
    ///
    /// - `timeout` - Total time allowed for one outbound request
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = Some(timeout);
        self
    }

    /// Set the sink used by the logging middleware.
    ///
    /// # Parameters
    ///
    /// - `log` - Request log implementation
    ///
    /// # Returns
    ///
    /// Returns the builder for method chaining.
    pub fn with_request_log(mut self, log: Arc<dyn RequestLog>) -> Self {
        self.request_log = Some(log);
        self
    }

    /// Build the final AppState with validation.
    ///
    /// # Returns
    ///
    /// Returns `Ok(AppState)` if valid.
    ///
    /// # Errors
    ///
    /// Returns error if the upstream URL does not parse or is not http(s),
    /// or if the HTTP client cannot be constructed.
    pub fn build(self) -> io::Result<AppState> {
        let raw_url = self.upstream_url.as_deref().unwrap_or(DEFAULT_UPSTREAM_URL);
        let base_url = Url::parse(raw_url).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidInput, format!("invalid upstream URL {raw_url}: {e}"))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("upstream URL must be http or https, got: {raw_url}"),
            ));
        }

        let mut client = reqwest::Client::builder();
        if let Some(timeout) = self.upstream_timeout {
            client = client.timeout(timeout);
        }
        let client = client.build().map_err(io::Error::other)?;

        let request_log = self.request_log.unwrap_or_else(|| Arc::new(TracingLog::new()));

        Ok(AppState::new(PostsClient::new(client, base_url), request_log))
    }
}
