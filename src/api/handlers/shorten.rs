//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "customCode": "my-link"  // optional, may be empty
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "shortUrl": "http://localhost:3000/abc123",
///   "shortCode": "abc123",
///   "originalUrl": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is invalid, the custom code fails
/// validation, or the custom code is already in use. Returns 500 when the
/// insert loses a code collision race.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let link = state
        .link_service
        .create_short_link(payload.url, payload.custom_code)
        .await?;

    let short_url = state
        .link_service
        .get_short_url(&state.base_url, &link.short_code);

    Ok(Json(ShortenResponse {
        success: true,
        short_url,
        short_code: link.short_code,
        original_url: link.original_url,
    }))
}
