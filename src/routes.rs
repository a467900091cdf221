//! Top-level router configuration combining API, redirect, and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Shortening form (static page)
//! - `GET  /stats.html`  - Stats lookup page (static page)
//! - `GET  /{code}`      - Short link redirect
//! - `/api/*`            - REST API (shorten, stats, links, health)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// The static pages are registered as exact routes so they take precedence
/// over the `/{code}` capture. A `.` never appears in a valid short code,
/// so `stats.html` cannot shadow a stored link.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new("static/index.html"))
        .route_service("/stats.html", ServeFile::new("static/stats.html"))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
