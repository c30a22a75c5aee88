#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;

use linklet::application::services::{AnalyticsCounter, RedirectionService, ShorteningService};
use linklet::domain::entities::{NewUrl, UrlRecord};
use linklet::domain::repositories::UrlRepository;
use linklet::error::AppError;
use linklet::infrastructure::cache::{AggregateCache, CacheService, MemoryCache, NullCache};
use linklet::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";

/// In-memory repository backing handler tests without a live database.
///
/// Mirrors the Postgres implementation's visibility rules: lookups see only
/// active records, the existence check sees every record, and the original
/// URL column is not unique.
#[derive(Default)]
pub struct MemoryUrlRepository {
    records: Mutex<Vec<UrlRecord>>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an active record directly, bypassing the shortening service.
    pub fn seed(&self, short_code: &str, original_url: &str) {
        self.records.lock().unwrap().push(UrlRecord::new(
            short_code.to_string(),
            original_url.to_string(),
            0,
            Utc::now(),
            Utc::now(),
            true,
        ));
    }

    /// Seeds a soft-deleted record; invisible to lookups but still occupying
    /// its code.
    pub fn seed_inactive(&self, short_code: &str, original_url: &str) {
        self.records.lock().unwrap().push(UrlRecord::new(
            short_code.to_string(),
            original_url.to_string(),
            0,
            Utc::now(),
            Utc::now(),
            false,
        ));
    }

    pub fn fetch_count(&self, short_code: &str) -> Option<i64> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_code == short_code)
            .map(|r| r.fetch_count)
    }

    pub fn record_count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError> {
        let mut records = self.records.lock().unwrap();

        if records.iter().any(|r| r.short_code == new_url.short_code) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "urls_pkey" }),
            ));
        }

        let record = UrlRecord::new(
            new_url.short_code,
            new_url.original_url,
            0,
            Utc::now(),
            Utc::now(),
            true,
        );
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_code == short_code && r.is_active)
            .cloned())
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.original_url == original_url && r.is_active)
            .cloned())
    }

    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.short_code == short_code))
    }

    async fn increment_fetch_count(&self, short_code: &str) -> Result<(), AppError> {
        let mut records = self.records.lock().unwrap();
        if let Some(record) = records
            .iter_mut()
            .find(|r| r.short_code == short_code && r.is_active)
        {
            record.fetch_count += 1;
            record.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// Builds an AppState over in-memory backends.
///
/// Returns the repository and cache handles so tests can seed data and
/// inspect side effects.
pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>, Arc<MemoryCache>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let cache = Arc::new(MemoryCache::new());

    let state = build_state(repository.clone(), cache.clone(), cache.clone());

    (state, repository, cache)
}

/// Builds an AppState with the cache backend "unreachable" (NullCache), for
/// fail-open coverage.
pub fn create_test_state_without_cache() -> (AppState, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let null_cache = Arc::new(NullCache::new());

    let state = build_state(repository.clone(), null_cache.clone(), null_cache);

    (state, repository)
}

fn build_state(
    repository: Arc<MemoryUrlRepository>,
    url_cache: Arc<dyn CacheService>,
    analytics_cache: Arc<dyn AggregateCache>,
) -> AppState {
    let shortening_service = Arc::new(ShorteningService::new(repository.clone()));
    let redirection_service = Arc::new(RedirectionService::new(
        repository.clone(),
        url_cache.clone(),
    ));
    let analytics = Arc::new(AnalyticsCounter::new(analytics_cache));

    AppState::new(
        shortening_service,
        redirection_service,
        analytics,
        repository,
        url_cache,
        TEST_BASE_URL.to_string(),
    )
}
