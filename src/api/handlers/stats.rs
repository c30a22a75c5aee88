//! Handlers for the click statistics endpoints.
//!
//! Counts come exclusively from the cache-resident click counter; they are
//! unrelated to the durable `fetch_count` and reset to nothing when the
//! cache backend restarts.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::stats::{StatsListResponse, StatsResetRequest, StatsResponse};
use crate::state::AppState;

/// Returns click counts for all tracked short codes.
///
/// # Endpoint
///
/// `GET /api/v1/stats`
///
/// An unavailable cache backend yields an empty mapping, not an error.
pub async fn stats_list_handler(State(state): State<AppState>) -> Json<StatsListResponse> {
    let clicks = state.analytics.get_all_counts().await;

    Json(StatsListResponse { clicks })
}

/// Returns the click count for one short code.
///
/// # Endpoint
///
/// `GET /api/v1/stats/{code}`
///
/// Unknown codes report zero clicks; this endpoint does not consult the
/// durable store.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Json<StatsResponse> {
    let clicks = state.analytics.get_count(&code).await;

    Json(StatsResponse {
        short_code: code,
        clicks,
    })
}

/// Resets the click counters for the given short codes.
///
/// # Endpoint
///
/// `POST /api/v1/stats/reset`
///
/// # Request Body
///
/// ```json
/// { "short_codes": ["k3EUVC", "yildHa"] }
/// ```
///
/// Absent codes are ignored.
pub async fn stats_reset_handler(
    State(state): State<AppState>,
    Json(payload): Json<StatsResetRequest>,
) -> StatusCode {
    state.analytics.reset(&payload.short_codes).await;

    StatusCode::NO_CONTENT
}
