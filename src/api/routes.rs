//! API route configuration.

use crate::api::handlers::{health_handler, links_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All JSON API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`      - Create a shortened URL
/// - `GET  /stats/{code}` - Statistics for a specific link
/// - `GET  /links`        - Most recently created links
/// - `GET  /health`       - Service health report
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/links", get(links_handler))
        .route("/health", get(health_handler))
}
