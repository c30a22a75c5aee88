//! Cache-resident click counter.

use std::collections::HashMap;
use std::sync::Arc;

use crate::infrastructure::cache::AggregateCache;

/// Name of the hash aggregate holding per-code click counts.
const CLICK_AGGREGATE: &str = "click_counts";

/// Counter tracking redirect volume independently of the durable
/// `fetch_count`.
///
/// Entirely cache-resident: counts survive only as long as the cache backend
/// does, and every operation inherits the cache's fail-open contract. Unlike
/// the durable counter, this one also counts cache-hit redirects. Callers
/// needing durable analytics must flush it externally before any cache
/// eviction or restart; no flush mechanism exists here.
pub struct AnalyticsCounter {
    cache: Arc<dyn AggregateCache>,
}

impl AnalyticsCounter {
    /// Creates a new analytics counter.
    pub fn new(cache: Arc<dyn AggregateCache>) -> Self {
        Self { cache }
    }

    /// Records one click for a short code. A no-op if the cache backend is
    /// unavailable.
    pub async fn record_click(&self, short_code: &str) {
        self.cache.increment(CLICK_AGGREGATE, short_code).await;
    }

    /// Returns the click count for a short code, 0 if absent or the backend
    /// is unavailable.
    pub async fn get_count(&self, short_code: &str) -> i64 {
        self.cache.get_field(CLICK_AGGREGATE, short_code).await
    }

    /// Returns all click counts, empty if the backend is unavailable.
    pub async fn get_all_counts(&self) -> HashMap<String, i64> {
        self.cache.get_all(CLICK_AGGREGATE).await
    }

    /// Removes the counters for the given short codes. A no-op for absent
    /// codes or an unavailable backend.
    pub async fn reset(&self, short_codes: &[String]) {
        self.cache.delete_fields(CLICK_AGGREGATE, short_codes).await;
    }
}
