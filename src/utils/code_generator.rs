//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use regex::Regex;
use std::sync::LazyLock;

/// Length of auto-generated short codes.
const CODE_LENGTH: usize = 6;

/// Maximum length of a user-provided custom code.
const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Reserved codes that cannot be used as short links.
///
/// The static asset mount also answers its own bare path, so a link named
/// after it would never be reachable.
const RESERVED_CODES: &[&str] = &["static"];

/// URL-safe alphabet for generated codes. 64 symbols, so a masked byte
/// indexes it uniformly.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and maps each byte onto the 64-symbol
/// URL-safe alphabet, producing a 6-character code. Reserved route names
/// are resampled.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_code() -> String {
    loop {
        let mut buffer = [0u8; CODE_LENGTH];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let code: String = buffer
            .iter()
            .map(|&byte| ALPHABET[(byte & 0x3f) as usize] as char)
            .collect();

        if !RESERVED_CODES.contains(&code.as_str()) {
            return code;
        }
    }
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Allowed characters: letters, digits, dashes, and underscores
/// - Length: 1-64 characters
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::InvalidCustomCode`] if any validation rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::InvalidCustomCode(
            "Custom code can only contain letters, numbers, dashes, and underscores".to_string(),
        ));
    }

    // The charset check passed, so the code is ASCII and byte length equals
    // character count.
    if code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::InvalidCustomCode(
            "Custom code must be 64 characters or fewer".to_string(),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::InvalidCustomCode(
            "This code is reserved".to_string(),
        ));
    }

    Ok(())
}
