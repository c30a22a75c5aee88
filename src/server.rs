//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, cache setup, service wiring, and Axum
//! server lifecycle.

use crate::application::services::{AnalyticsCounter, RedirectionService, ShorteningService};
use crate::config::Config;
use crate::infrastructure::cache::{
    ANALYTICS_CACHE_PREFIX, AggregateCache, CacheService, NullCache, RedisCache, URL_CACHE_PREFIX,
};
use crate::infrastructure::persistence::PgUrlRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - The two cache instances (Redis, or NullCache fallback) sharing one
///   backend under distinct key namespaces
/// - Services, constructed once per process with injected collaborators
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
///
/// An unreachable Redis is NOT an error: the service starts with caching
/// disabled and runs entirely off the durable store.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let (url_cache, analytics_cache) = build_caches(&config).await;

    let repository = Arc::new(PgUrlRepository::new(Arc::new(pool)));

    let shortening_service = Arc::new(ShorteningService::new(repository.clone()));
    let redirection_service = Arc::new(RedirectionService::new(
        repository.clone(),
        url_cache.clone(),
    ));
    let analytics = Arc::new(AnalyticsCounter::new(analytics_cache));

    let state = AppState::new(
        shortening_service,
        redirection_service,
        analytics,
        repository,
        url_cache,
        config.base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the URL-map and click-aggregate cache instances.
///
/// Both share the Redis backend but live under distinct key namespaces.
/// When Redis is unconfigured or unreachable at startup, both degrade to
/// [`NullCache`].
async fn build_caches(config: &Config) -> (Arc<dyn CacheService>, Arc<dyn AggregateCache>) {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return (Arc::new(NullCache::new()), Arc::new(NullCache::new()));
    };

    let url_cache =
        RedisCache::connect(redis_url, URL_CACHE_PREFIX, config.cache_ttl_seconds).await;
    let analytics_cache =
        RedisCache::connect(redis_url, ANALYTICS_CACHE_PREFIX, config.cache_ttl_seconds).await;

    match (url_cache, analytics_cache) {
        (Ok(url), Ok(analytics)) => {
            tracing::info!("Cache enabled (Redis)");
            (Arc::new(url), Arc::new(analytics))
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            (Arc::new(NullCache::new()), Arc::new(NullCache::new()))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
