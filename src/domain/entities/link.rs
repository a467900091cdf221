//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Represents the mapping between a short code and the original URL as it
/// was submitted. Codes are immutable; `clicks` is the only field that
/// changes after creation.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            clicks,
        }
    }
}

/// Input data for creating a new link.
///
/// `id`, `created_at`, and the click counter are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            now,
            0,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.created_at, now);
        assert_eq!(link.clicks, 0);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            short_code: "xyz789".to_string(),
            original_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.short_code, "xyz789");
        assert_eq!(new_link.original_url, "https://rust-lang.org");
    }
}
