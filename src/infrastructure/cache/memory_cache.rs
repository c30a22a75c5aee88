//! In-process cache implementation backed by standard maps.

use super::service::{AggregateCache, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// In-memory cache honoring TTLs, for tests and single-process deployments.
///
/// Locks are never held across await points; contention is limited to the
/// map operations themselves.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    aggregates: Mutex<HashMap<String, HashMap<String, i64>>>,
}

impl MemoryCache {
    /// Creates an empty in-memory cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");

        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) {
        let entry = Entry {
            value: value.to_string(),
            expires_at: ttl_seconds.map(|ttl| Instant::now() + Duration::from_secs(ttl)),
        };

        self.entries
            .lock()
            .expect("cache lock poisoned")
            .insert(key.to_string(), entry);
    }

    async fn delete(&self, key: &str) {
        self.entries
            .lock()
            .expect("cache lock poisoned")
            .remove(key);
    }

    async fn available(&self) -> bool {
        true
    }
}

#[async_trait]
impl AggregateCache for MemoryCache {
    async fn increment(&self, aggregate: &str, field: &str) {
        let mut aggregates = self.aggregates.lock().expect("cache lock poisoned");
        let counts = aggregates.entry(aggregate.to_string()).or_default();
        *counts.entry(field.to_string()).or_insert(0) += 1;
    }

    async fn get_field(&self, aggregate: &str, field: &str) -> i64 {
        self.aggregates
            .lock()
            .expect("cache lock poisoned")
            .get(aggregate)
            .and_then(|counts| counts.get(field).copied())
            .unwrap_or(0)
    }

    async fn get_all(&self, aggregate: &str) -> HashMap<String, i64> {
        self.aggregates
            .lock()
            .expect("cache lock poisoned")
            .get(aggregate)
            .cloned()
            .unwrap_or_default()
    }

    async fn delete_fields(&self, aggregate: &str, fields: &[String]) {
        let mut aggregates = self.aggregates.lock().expect("cache lock poisoned");
        if let Some(counts) = aggregates.get_mut(aggregate) {
            for field in fields {
                counts.remove(field);
            }
        }
    }
}
