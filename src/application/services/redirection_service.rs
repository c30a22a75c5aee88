//! Cache-aside URL resolution for the redirect hot path.

use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use serde_json::json;
use tracing::debug;

/// Service resolving short codes to original URLs.
///
/// Reads go through the URL-map cache first and fall back to the durable
/// store on a miss. The durable fetch counter is only incremented on the
/// miss path: a cache hit returns immediately without touching the store,
/// trading counter accuracy for latency. Under high hit ratios
/// `fetch_count` therefore undercounts true traffic; that is accepted.
pub struct RedirectionService {
    repository: Arc<dyn UrlRepository>,
    cache: Arc<dyn CacheService>,
}

impl RedirectionService {
    /// Creates a new redirection service.
    pub fn new(repository: Arc<dyn UrlRepository>, cache: Arc<dyn CacheService>) -> Self {
        Self { repository, cache }
    }

    /// Resolves a short code to its original URL.
    ///
    /// On a cache miss the record is looked up among active records, written
    /// back to the cache best-effort, and the durable fetch counter is
    /// incremented. Negative results are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] (including the offending code in the
    /// message) when the code is unknown or inactive. Store failures
    /// propagate as-is; cache failures never surface here.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        if let Some(cached_url) = self.cache.get(short_code).await {
            debug!("Resolved {} from cache", short_code);
            return Ok(cached_url);
        }

        let record = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    format!("Short code '{}' not found", short_code),
                    json!({ "code": short_code }),
                )
            })?;

        self.cache.set(short_code, &record.original_url, None).await;

        self.repository.increment_fetch_count(short_code).await?;

        Ok(record.original_url)
    }
}
