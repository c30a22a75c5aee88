//! Redis-backed cache implementation.

use super::service::{AggregateCache, CacheService};
use async_trait::async_trait;
use redis::{
    AsyncCommands, Client,
    aio::{ConnectionManager, ConnectionManagerConfig},
};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Bound on connect and response times so a dead backend degrades latency
/// predictably instead of hanging requests.
const OPERATION_TIMEOUT: Duration = Duration::from_secs(1);

/// Redis cache with a per-instance key namespace.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. All operations are fail-open: errors are logged but never
/// propagate to callers.
pub struct RedisCache {
    conn: ConnectionManager,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and
    /// configures the key namespace and default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every key (e.g., `"url:"`)
    /// - `default_ttl_seconds` - TTL applied when [`CacheService::set`] is
    ///   called with `ttl_seconds = None`
    ///
    /// # Errors
    ///
    /// Returns a [`redis::RedisError`] if the URL is invalid, the connection
    /// cannot be established within the timeout, or the PING fails. Callers
    /// are expected to fall back to [`super::NullCache`] on error.
    pub async fn connect(
        redis_url: &str,
        key_prefix: &str,
        default_ttl_seconds: u64,
    ) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;

        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(Some(OPERATION_TIMEOUT))
            .set_response_timeout(Some(OPERATION_TIMEOUT));

        let manager = ConnectionManager::new_with_config(client, config).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis (namespace '{}')", key_prefix);

        Ok(Self {
            conn: manager,
            key_prefix: key_prefix.to_string(),
            default_ttl: default_ttl_seconds,
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> Option<String> {
        let key = self.build_key(key);
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(value)) => {
                debug!("Cache HIT: {}", key);
                Some(value)
            }
            Ok(None) => {
                debug!("Cache MISS: {}", key);
                None
            }
            Err(e) => {
                warn!("Redis unavailable during get: {}", e);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) {
        let key = self.build_key(key);
        let mut conn = self.conn.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        match conn.set_ex::<_, _, ()>(&key, value, ttl).await {
            Ok(_) => debug!("Cache SET: {} (TTL: {}s)", key, ttl),
            Err(e) => warn!("Redis unavailable during set: {}", e),
        }
    }

    async fn delete(&self, key: &str) {
        let key = self.build_key(key);
        let mut conn = self.conn.clone();

        if let Err(e) = conn.del::<_, ()>(&key).await {
            warn!("Redis unavailable during delete: {}", e);
        }
    }

    async fn available(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[async_trait]
impl AggregateCache for RedisCache {
    async fn increment(&self, aggregate: &str, field: &str) {
        let key = self.build_key(aggregate);
        let mut conn = self.conn.clone();

        if let Err(e) = conn.hincr::<_, _, _, ()>(&key, field, 1).await {
            warn!("Redis unavailable during increment: {}", e);
        }
    }

    async fn get_field(&self, aggregate: &str, field: &str) -> i64 {
        let key = self.build_key(aggregate);
        let mut conn = self.conn.clone();

        match conn.hget::<_, _, Option<i64>>(&key, field).await {
            Ok(count) => count.unwrap_or(0),
            Err(e) => {
                warn!("Redis unavailable during get_field: {}", e);
                0
            }
        }
    }

    async fn get_all(&self, aggregate: &str) -> HashMap<String, i64> {
        let key = self.build_key(aggregate);
        let mut conn = self.conn.clone();

        match conn.hgetall::<_, HashMap<String, i64>>(&key).await {
            Ok(counts) => counts,
            Err(e) => {
                warn!("Redis unavailable during get_all: {}", e);
                HashMap::new()
            }
        }
    }

    async fn delete_fields(&self, aggregate: &str, fields: &[String]) {
        if fields.is_empty() {
            return;
        }

        let key = self.build_key(aggregate);
        let mut conn = self.conn.clone();

        if let Err(e) = conn.hdel::<_, _, ()>(&key, fields).await {
            warn!("Redis unavailable during delete_fields: {}", e);
        }
    }
}
