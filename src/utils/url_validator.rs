//! URL validation for submitted links.
//!
//! Accepts any absolute URI with a scheme. The original string is stored
//! verbatim, so parsing acts as a gate rather than a transformation, and
//! raw whitespace or control characters fail outright instead of being
//! silently repaired by the parser.

use crate::error::AppError;
use url::Url;

/// Validates that the input parses as an absolute URI.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] when the input is empty, relative,
/// contains whitespace or control characters, or is not a URI at all.
pub fn validate_url(input: &str) -> Result<(), AppError> {
    // `Url::parse` strips raw tabs and newlines and percent-encodes spaces.
    // The raw input is what gets stored, so anything the parser would have
    // to repair is invalid: a stored newline can never travel in a
    // `Location` header.
    if input.chars().any(|c| c.is_ascii_control() || c == ' ') {
        return Err(AppError::InvalidUrl);
    }

    Url::parse(input)
        .map(|_| ())
        .map_err(|_| AppError::InvalidUrl)
}
