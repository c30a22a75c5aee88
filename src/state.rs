//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsCounter, RedirectionService, ShorteningService};
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::cache::CacheService;

/// Handles shared by every request.
///
/// Services are constructed once per process with their collaborators
/// injected (no singletons, no per-request factories) and are safe for
/// concurrent use; there is no request-level locking anywhere.
#[derive(Clone)]
pub struct AppState {
    pub shortening_service: Arc<ShorteningService>,
    pub redirection_service: Arc<RedirectionService>,
    pub analytics: Arc<AnalyticsCounter>,
    /// Kept alongside the services for health checks.
    pub repository: Arc<dyn UrlRepository>,
    /// URL-map cache handle, kept for health checks.
    pub cache: Arc<dyn CacheService>,
    /// Base address joined with a short code to form the display URL.
    pub base_url: String,
}

impl AppState {
    pub fn new(
        shortening_service: Arc<ShorteningService>,
        redirection_service: Arc<RedirectionService>,
        analytics: Arc<AnalyticsCounter>,
        repository: Arc<dyn UrlRepository>,
        cache: Arc<dyn CacheService>,
        base_url: String,
    ) -> Self {
        Self {
            shortening_service,
            redirection_service,
            analytics,
            repository,
            cache,
            base_url,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
