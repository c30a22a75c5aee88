//! Cache service traits.
//!
//! Failure modes are encoded in the return contracts themselves: a backend
//! connectivity failure is indistinguishable from a miss, writes are
//! fire-and-forget, and counter reads default to zero/empty. No cache
//! operation ever raises to a caller; the redirect hot path must not fail or
//! 5xx solely because the cache backend is down.

use async_trait::async_trait;
use std::collections::HashMap;

/// Keyed string cache with TTL support.
///
/// Instances are parameterized by a key namespace to prevent cross-instance
/// collisions (the URL map and the click aggregate share a backend but never
/// share keys).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed, bounded timeouts
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map for tests
/// - [`crate::infrastructure::cache::NullCache`] - No-op when caching is disabled
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached value.
    ///
    /// Returns `None` on a miss *and* on a backend failure; callers cannot
    /// tell the two apart and must fall back to the durable store either way.
    async fn get(&self, key: &str) -> Option<String>;

    /// Stores a value with an optional TTL in seconds.
    ///
    /// `None` applies the instance default. Backend failures are logged and
    /// swallowed.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>);

    /// Removes a cached value. Backend failures are logged and swallowed.
    async fn delete(&self, key: &str);

    /// Liveness probe for health reporting only.
    ///
    /// Returns `false` on any backend error, never raises. Must not be used
    /// to gate reads or writes.
    async fn available(&self) -> bool;
}

/// Hash-aggregate extension over [`CacheService`].
///
/// An aggregate is a single named mapping of `field -> integer count` with no
/// TTL. Used for the cache-resident click counter; its data is lost if the
/// backend is flushed or restarted, which is an accepted tradeoff.
#[async_trait]
pub trait AggregateCache: CacheService {
    /// Atomically adds 1 to a field. A backend failure means the click is
    /// silently not counted.
    async fn increment(&self, aggregate: &str, field: &str);

    /// Reads a single field, defaulting to 0 when absent or unreachable.
    async fn get_field(&self, aggregate: &str, field: &str) -> i64;

    /// Reads the whole aggregate, defaulting to empty when unreachable.
    async fn get_all(&self, aggregate: &str) -> HashMap<String, i64>;

    /// Removes the given fields. A no-op for absent fields or an unreachable
    /// backend.
    async fn delete_fields(&self, aggregate: &str, fields: &[String]);
}
