//! Handler for short URL redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Template for the not-found page shown on unknown codes.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    code: String,
}

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link by its code
/// 2. Persist the click counter increment
/// 3. Return `302 Found` with the stored URL in `Location`
///
/// The `Location` value is the URL exactly as it was submitted.
///
/// # Errors
///
/// An unknown code renders the HTML not-found page with status 404 and
/// changes no state. Database failures surface as JSON 500 responses.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.link_service.resolve_redirect(&code).await {
        Ok(link) => {
            Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response())
        }
        Err(AppError::NotFound) => {
            let page = NotFoundTemplate { code };
            Ok((StatusCode::NOT_FOUND, page).into_response())
        }
        Err(err) => Err(err),
    }
}
