//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A durable URL record keyed by its short code.
///
/// `short_code` is the primary identity. `original_url` is intended to be
/// 1:1 with the code but is not enforced as unique by the store; creation
/// deduplicates with a best-effort read before write.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UrlRecord {
    pub short_code: String,
    pub original_url: String,
    pub fetch_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        short_code: String,
        original_url: String,
        fetch_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        Self {
            short_code,
            original_url,
            fetch_count,
            created_at,
            updated_at,
            is_active,
        }
    }

    /// Returns true if the record is visible to lookups.
    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Input data for creating a new URL record.
#[derive(Debug, Clone)]
pub struct NewUrl {
    pub short_code: String,
    pub original_url: String,
}
