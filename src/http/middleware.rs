//! Request/response logging middleware.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::Response,
};

use crate::request_log::RequestLog;

/// Log every request before its handler runs and its status afterwards.
///
/// The continuation runs exactly once and the response is returned as is.
/// Handler errors are already responses by the time they get here, so the
/// post-hook sees the final status of every request, errors included.
pub async fn log_requests(
    State(log): State<Arc<dyn RequestLog>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let url = full_url(&request);

    log.request_started(&method, &url);

    let response = next.run(request).await;

    log.request_finished(&method, &url, response.status());

    response
}

/// Reconstruct the URL the client addressed.
///
/// Server-side request URIs usually carry only path and query; the scheme
/// defaults to `http` and the host comes from the `Host` header.
fn full_url(request: &Request) -> String {
    let uri = request.uri();
    let scheme = uri.scheme_str().unwrap_or("http");
    let host = uri
        .authority()
        .map(|authority| authority.as_str().to_string())
        .or_else(|| {
            request.headers().get(HOST).and_then(|h| h.to_str().ok()).map(str::to_string)
        })
        .unwrap_or_else(|| "localhost".to_string());
    let path = uri.path_and_query().map_or("/", |pq| pq.as_str());

    format!("{scheme}://{host}{path}")
}
