//! Caching layer for the redirect hot path and the click counter.
//!
//! Provides the [`CacheService`] / [`AggregateCache`] traits with three
//! implementations:
//! - [`RedisCache`] - Production Redis-backed cache
//! - [`MemoryCache`] - In-process implementation for tests
//! - [`NullCache`] - No-op implementation for disabled caching
//!
//! The service runs two instances of the same abstraction, distinguished by
//! key namespace: the URL map (prefix `url:`, entries carry a TTL) and the
//! click aggregate (prefix `analytics:`, a single hash with no TTL).

mod memory_cache;
mod null_cache;
mod redis_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{AggregateCache, CacheService};

/// Key namespace of the URL-map cache instance.
pub const URL_CACHE_PREFIX: &str = "url:";

/// Key namespace of the click-aggregate cache instance.
pub const ANALYTICS_CACHE_PREFIX: &str = "analytics:";
