//! Handler for the recent links listing.

use axum::{Json, extract::State};

use crate::api::dto::links::LinkRecord;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recently created links.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Response
///
/// A top-level JSON array, newest first, at most 100 entries:
///
/// ```json
/// [
///   {
///     "id": 2,
///     "short_code": "abc123",
///     "original_url": "https://example.com",
///     "created_at": "2026-01-15T12:00:00Z",
///     "clicks": 7
///   }
/// ]
/// ```
///
/// An empty store yields `[]`.
pub async fn links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkRecord>>, AppError> {
    let links = state.link_service.list_recent_links(None).await?;

    Ok(Json(links.into_iter().map(LinkRecord::from).collect()))
}
