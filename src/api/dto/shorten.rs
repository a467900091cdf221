//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// `customCode` is optional; an empty string is equivalent to omitting it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL to shorten. A missing field is treated as an empty
    /// string so it fails URL validation rather than body deserialization.
    #[serde(default)]
    pub url: String,

    /// Optional caller-chosen short code.
    pub custom_code: Option<String>,
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub success: bool,
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
}
