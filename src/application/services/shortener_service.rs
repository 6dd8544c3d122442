//! Short code resolution engine.

use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use serde_json::json;

use crate::domain::entities::{NewUrlMapping, UrlMapping, UsageSummary};
use crate::domain::repositories::UrlMappingRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Default number of insert attempts before giving up on code generation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service implementing the shorten / resolve / stats / update / delete lifecycle.
///
/// The service is stateless: every call validates its input, then talks to the
/// repository. Uniqueness of codes and atomicity of the hit counter are delegated
/// to the store, so any number of callers may use one instance concurrently.
pub struct ShortenerService<R: UrlMappingRepository> {
    repository: Arc<R>,
    max_attempts: usize,
}

impl<R: UrlMappingRepository> ShortenerService<R> {
    /// Creates a new service with the default retry budget.
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_max_attempts(repository, DEFAULT_MAX_ATTEMPTS)
    }

    /// Creates a new service allowing `max_attempts` inserts per shorten call.
    pub fn with_max_attempts(repository: Arc<R>, max_attempts: usize) -> Self {
        Self {
            repository,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Creates a mapping for `url` under a freshly generated short code.
    ///
    /// # Code Generation
    ///
    /// A random code is generated and inserted. If the store reports that the code
    /// is taken, a new one is generated, up to `max_attempts` inserts in total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] before touching the store if `url` is not an
    /// absolute http(s) URL.
    /// Returns [`AppError::CodeGenerationExhausted`] when every attempt collided.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    pub async fn shorten(&self, url: String) -> Result<UrlMapping, AppError> {
        check_url(&url)?;

        for attempt in 1..=self.max_attempts {
            let code = generate_code()?;
            let new_mapping = NewUrlMapping::new(url.clone(), code, now());

            match self.repository.insert(new_mapping.clone()).await {
                Ok(id) => {
                    let mapping = UrlMapping::from_insert(id, new_mapping);
                    tracing::info!(
                        id = mapping.id,
                        short_code = %mapping.short_code,
                        attempt,
                        "Short URL created"
                    );
                    return Ok(mapping);
                }
                Err(AppError::DuplicateCode { .. }) => {
                    tracing::warn!(
                        short_code = %new_mapping.short_code,
                        attempt,
                        "Short code collision, regenerating"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            "Gave up generating a unique short code"
        );
        Err(AppError::code_generation_exhausted(
            "Failed to generate unique code",
            json!({ "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short code and records the hit.
    ///
    /// The returned record carries the counter value after this hit was applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist (or was deleted
    /// between the lookup and the increment).
    pub async fn resolve(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        let mut mapping = self.stats(short_code).await?;

        mapping.access_count = self
            .repository
            .increment_access_count(mapping.id)
            .await
            .map_err(|e| match e {
                AppError::NotFound { .. } => AppError::short_code_not_found(short_code),
                other => other,
            })?;

        tracing::debug!(
            short_code,
            access_count = mapping.access_count,
            "Short URL resolved"
        );
        Ok(mapping)
    }

    /// Returns the record for `short_code` without counting a hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn stats(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| AppError::short_code_not_found(short_code))
    }

    /// Points an existing short code at a new URL.
    ///
    /// Only `original_url` and `updated_at` change; the code, `created_at` and the
    /// hit counter are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] before touching the store if `url` is invalid.
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn update(&self, short_code: &str, url: String) -> Result<UrlMapping, AppError> {
        check_url(&url)?;

        self.repository
            .update_url(short_code, &url, now())
            .await?;

        let mapping = self.stats(short_code).await?;
        tracing::info!(short_code, "Short URL updated");
        Ok(mapping)
    }

    /// Permanently removes a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        self.repository.delete(short_code).await?;
        tracing::info!(short_code, "Short URL deleted");
        Ok(())
    }

    /// Lists mappings newest first, optionally capped at `limit` records.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<UrlMapping>, AppError> {
        self.repository.list_all(limit).await
    }

    /// Returns store-wide totals. Read-only.
    pub async fn summary(&self) -> Result<UsageSummary, AppError> {
        let total_urls = self.repository.count_all().await?;
        let total_clicks = self.repository.sum_access_counts().await?;

        Ok(UsageSummary {
            total_urls,
            total_clicks,
        })
    }
}

fn check_url(url: &str) -> Result<(), AppError> {
    validate_url(url).map_err(|e| {
        AppError::invalid_url(
            "Invalid URL",
            json!({ "url": url, "reason": e.to_string() }),
        )
    })
}

/// Current time at the store's microsecond precision.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
