//! DTOs for the recent links listing.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// One row of the recent-links listing.
///
/// Unlike the shorten and stats responses this endpoint exposes stored
/// rows directly, so the field names stay snake_case.
#[derive(Debug, Serialize)]
pub struct LinkRecord {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<Link> for LinkRecord {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            short_code: link.short_code,
            original_url: link.original_url,
            created_at: link.created_at,
            clicks: link.clicks,
        }
    }
}
