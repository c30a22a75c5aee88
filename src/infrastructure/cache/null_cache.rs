//! No-op cache implementation for disabled caching.

use super::service::{AggregateCache, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is unconfigured or the connection fails at startup. Every
/// read is a miss and every write succeeds immediately without storing
/// anything, so the service runs entirely off the durable store.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Testing scenarios where caching should be bypassed
/// - Fallback when the Redis connection fails at startup
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> Option<String> {
        None
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) {}

    async fn delete(&self, _key: &str) {}

    // A no-op backend cannot be "down"; reporting true keeps health checks
    // green in deployments that run without a cache.
    async fn available(&self) -> bool {
        true
    }
}

#[async_trait]
impl AggregateCache for NullCache {
    async fn increment(&self, _aggregate: &str, _field: &str) {}

    async fn get_field(&self, _aggregate: &str, _field: &str) -> i64 {
        0
    }

    async fn get_all(&self, _aggregate: &str) -> HashMap<String, i64> {
        HashMap::new()
    }

    async fn delete_fields(&self, _aggregate: &str, _fields: &[String]) {}
}
