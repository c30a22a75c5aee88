//! Handler for the URL creation endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_check::check_url;

/// Creates a short code for a URL.
///
/// # Endpoint
///
/// `POST /api/v1/urls`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with the mapping. Creating the same URL twice returns the
/// existing record with the same code; the second call performs no write.
///
/// ```json
/// {
///   "short_code": "k3EUVC",
///   "original_url": "https://example.com/some/long/path",
///   "short_url": "http://localhost:3000/k3EUVC"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for malformed or non-HTTP(S) URLs.
/// Returns 500 Internal Server Error when code generation exhausts its
/// collision-retry attempts.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;
    check_url(&payload.url)
        .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": payload.url })))?;

    let record = state.shortening_service.create(payload.url).await?;

    let short_url = state.short_url(&record.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: record.short_code,
            original_url: record.original_url,
            short_url,
        }),
    ))
}
