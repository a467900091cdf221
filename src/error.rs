//! Application error type shared by every layer.
//!
//! `Display` carries the exact client-facing message; [`IntoResponse`]
//! renders it as the flat `{"error": "<message>"}` body the API exposes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Submitted URL is missing or does not parse as an absolute URI.
    #[error("Invalid URL provided")]
    InvalidUrl,

    /// Custom code failed charset or length validation.
    #[error("{0}")]
    InvalidCustomCode(String),

    /// Requested custom code is already mapped to a URL.
    #[error("Custom code already in use")]
    CustomCodeTaken,

    /// No link exists for the requested code.
    #[error("Shortlink not found")]
    NotFound,

    /// Insert hit the unique constraint on `short_code`. Reachable when
    /// code generation exhausts its collision checks or two writers race
    /// on the same custom code.
    #[error("Failed to create shortlink")]
    DuplicateCode,

    /// Unexpected database failure. The source is logged, never sent to
    /// the client.
    #[error("Internal server error")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::InvalidCustomCode(_) | AppError::CustomCodeTaken => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateCode | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = ?self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
