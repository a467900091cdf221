use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub base_url: String,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<SqliteLinkRepository>>, base_url: String) -> Self {
        Self {
            link_service,
            base_url,
        }
    }
}
