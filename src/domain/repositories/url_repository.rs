//! Repository trait for URL record data access.

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the durable URL store.
///
/// The store is the source of truth for short code mappings; the cache layer
/// in front of it is best-effort only. All failures here are fail-fast and
/// surface as [`AppError::Internal`] (or [`AppError::Conflict`] on a
/// primary key collision at insert time).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new URL record with `fetch_count = 0` and `is_active = true`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_url: NewUrl) -> Result<UrlRecord, AppError>;

    /// Finds an active record by its short code.
    ///
    /// Inactive (soft-deleted) records are invisible to this lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds an active record by its original URL.
    ///
    /// Used for the idempotency check before creating a new code. This is a
    /// query, not a constraint: two concurrent creates of the same URL can
    /// both miss it and produce two records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Checks whether a short code exists, active or not.
    ///
    /// Inactive records still occupy their code, so collision checking must
    /// see them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists_by_code(&self, short_code: &str) -> Result<bool, AppError>;

    /// Increments the fetch counter of an active record and bumps its
    /// `updated_at` timestamp.
    ///
    /// A no-op when the code is unknown or inactive. Each increment is
    /// independently valid; concurrent increments rely on the store's atomic
    /// single-row update, not on coordination in this layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn increment_fetch_count(&self, short_code: &str) -> Result<(), AppError>;
}
