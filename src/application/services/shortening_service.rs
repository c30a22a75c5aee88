//! URL shortening service with idempotent creation.

use std::sync::Arc;

use crate::domain::entities::{NewUrl, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::shortener::{DEFAULT_CODE_LENGTH, generate_short_code};
use serde_json::json;

/// Collision-retry limit for code generation. Exhausting it fails the
/// request; there is no further retry.
const MAX_ATTEMPTS: u32 = 5;

/// Service for creating shortened URLs.
///
/// Creation is idempotent with respect to the original URL: an existing
/// active record is returned unchanged, and only a first-time URL performs a
/// durable write.
pub struct ShorteningService {
    repository: Arc<dyn UrlRepository>,
}

impl ShorteningService {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short code for a URL, or returns the existing record.
    ///
    /// # Idempotency
    ///
    /// The lookup by original URL is a read, not a constraint; two concurrent
    /// calls for the same URL can both miss it and create two distinct
    /// records. The durable store accepts that.
    ///
    /// # Code Generation
    ///
    /// Candidates are generated deterministically with salts `0..5`, so
    /// retries of the same request walk the same sequence. The first code not
    /// present in the store is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when all salted candidates collide.
    /// Store failures propagate as-is.
    pub async fn create(&self, original_url: String) -> Result<UrlRecord, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return Ok(existing);
        }

        let short_code = self.generate_unique_code(&original_url).await?;

        self.repository
            .create(NewUrl {
                short_code,
                original_url,
            })
            .await
    }

    /// Generates a unique short code, handling collisions with salted
    /// retries.
    async fn generate_unique_code(&self, original_url: &str) -> Result<String, AppError> {
        for salt in 0..MAX_ATTEMPTS {
            let code = generate_short_code(original_url, salt, DEFAULT_CODE_LENGTH);

            if !self.repository.exists_by_code(&code).await? {
                return Ok(code);
            }
        }

        tracing::error!(
            "Short code generation failed for URL {} after {} attempts",
            original_url,
            MAX_ATTEMPTS
        );

        Err(AppError::internal(
            format!("Failed to generate unique code after {} attempts", MAX_ATTEMPTS),
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}
