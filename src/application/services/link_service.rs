//! Link creation, lookup, and redirect service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Upper bound (and default) for the recent-links listing.
const MAX_RECENT_LINKS: i64 = 100;

/// Service for creating and resolving shortened links.
///
/// Handles URL validation, code generation and validation, collision
/// handling, and click counting.
pub struct LinkService<R: LinkRepository> {
    link_repository: Arc<R>,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The URL to shorten, stored verbatim
    /// - `custom_code` - Optional custom short code; an empty string is
    ///   treated as absent
    ///
    /// # Code Generation
    ///
    /// - If `custom_code` is provided, validates it and checks availability
    /// - Otherwise generates a random 6-character code, checking up to 5
    ///   candidates against the store; after 5 occupied candidates the next
    ///   one is inserted without a check and the unique constraint has the
    ///   final word
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL does not parse as an
    /// absolute URI, [`AppError::InvalidCustomCode`] if the custom code
    /// fails validation, [`AppError::CustomCodeTaken`] if it is already
    /// mapped, and [`AppError::DuplicateCode`] if the final insert loses a
    /// collision race.
    pub async fn create_short_link(
        &self,
        original_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(&original_url)?;

        let short_code = match custom_code.filter(|code| !code.is_empty()) {
            Some(custom) => {
                validate_custom_code(&custom)?;

                if self.link_repository.find_by_code(&custom).await?.is_some() {
                    return Err(AppError::CustomCodeTaken);
                }

                custom
            }
            None => self.generate_unique_code().await?,
        };

        let new_link = NewLink {
            short_code,
            original_url,
        };

        self.link_repository.create(new_link).await
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Resolves a short code for redirecting and counts the click.
    ///
    /// The increment is persisted before the link is returned, so a response
    /// built from the result never races ahead of the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    pub async fn resolve_redirect(&self, code: &str) -> Result<Link, AppError> {
        let link = self.get_link_by_code(code).await?;

        self.link_repository.increment_clicks(code).await?;

        Ok(link)
    }

    /// Lists the most recently created links, newest first.
    ///
    /// `limit` defaults to 100 and is clamped to 1..=100.
    pub async fn list_recent_links(&self, limit: Option<i64>) -> Result<Vec<Link>, AppError> {
        let limit = limit.unwrap_or(MAX_RECENT_LINKS).clamp(1, MAX_RECENT_LINKS);

        self.link_repository.list_recent(limit).await
    }

    /// Counts total stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Constructs the full short URL from the public base URL and a code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }

    /// Picks a random short code, probing the store for collisions.
    ///
    /// Checks at most 5 candidates; the candidate held after the loop may
    /// be unverified, in which case the insert's unique constraint decides.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        const MAX_COLLISION_CHECKS: usize = 5;

        let mut code = generate_code();

        for _ in 0..MAX_COLLISION_CHECKS {
            if self.link_repository.find_by_code(&code).await?.is_none() {
                break;
            }

            code = generate_code();
        }

        Ok(code)
    }
}
