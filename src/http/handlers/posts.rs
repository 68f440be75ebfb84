//! Listing proxy for the third-party posts service.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde_json::Value;

use crate::error::AppError;
use crate::http::state::AppState;
use crate::http::types::PostsParams;

/// Characters of each post body shown in the log summary.
const BODY_PREVIEW_CHARS: usize = 50;

/// Fetch `limit` posts from the upstream service and return them unchanged.
///
/// # Parameters
///
/// - `state` - Application state containing the posts client
/// - `params` - Query parameters; `limit` defaults to 5
///
/// # Returns
///
/// Returns the upstream JSON array.
///
/// # Errors
///
/// Returns `AppError::InvalidQuery` for a non-integer `limit`,
/// `AppError::Upstream` when the outbound call fails, and
/// `AppError::MalformedPost` when a post lacks a title or a text body.
pub async fn posts(
    State(state): State<AppState>,
    params: Result<Query<PostsParams>, QueryRejection>,
) -> Result<Json<Vec<Value>>, AppError> {
    let Query(params) = params?;
    tracing::info!("Fetching {} posts from API...", params.limit);

    let posts = state.posts.fetch_posts(params.limit).await?;
    log_summary(&posts)?;

    Ok(Json(posts))
}

/// Write a numbered title/body preview of each post to the log.
///
/// Every post needs a `title` and a string `body`; the first one that
/// lacks either aborts the summary.
fn log_summary(posts: &[Value]) -> Result<(), AppError> {
    tracing::info!("Fetched {} posts:", posts.len());
    for (i, post) in posts.iter().enumerate() {
        let number = i + 1;
        let title = match post.get("title") {
            Some(Value::String(title)) => title.clone(),
            Some(other) => other.to_string(),
            None => return Err(malformed(number, "missing title")),
        };
        let body = post
            .get("body")
            .and_then(Value::as_str)
            .ok_or_else(|| malformed(number, "missing or non-text body"))?;
        tracing::info!("{number}. {title}");
        tracing::info!("   Body: {}...", preview(body, BODY_PREVIEW_CHARS));
    }
    Ok(())
}

fn malformed(index: usize, reason: &str) -> AppError {
    AppError::MalformedPost { index, reason: reason.to_string() }
}

/// First `max_chars` characters of `text`.
fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
