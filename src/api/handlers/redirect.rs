//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through the cache-aside read path
///    ([`crate::application::services::RedirectionService`])
/// 2. Record a cache-only analytics click (fire-and-forget semantics)
/// 3. Return 307 Temporary Redirect
///
/// The analytics click is counted on every successful redirect, cache hit or
/// miss, unlike the durable fetch counter which only moves on misses.
///
/// # Errors
///
/// Returns 404 Not Found, naming the code, when it is unknown or inactive.
/// Cache health is never observable here: with the cache backend down the
/// redirect still succeeds off the durable store.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.redirection_service.resolve(&code).await?;

    state.analytics.record_click(&code).await;

    Ok(Redirect::temporary(&original_url))
}
