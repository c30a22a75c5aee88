//! API route configuration.

use crate::api::handlers::{
    shorten_handler, stats_handler, stats_list_handler, stats_reset_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Versioned API routes.
///
/// # Endpoints
///
/// - `POST /urls`          - Create a shortened URL
/// - `GET  /stats`         - Click counts for all short codes
/// - `GET  /stats/{code}`  - Click count for a specific short code
/// - `POST /stats/reset`   - Reset click counters
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(shorten_handler))
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/stats/reset", post(stats_reset_handler))
}
