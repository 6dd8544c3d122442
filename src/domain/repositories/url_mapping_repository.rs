//! Repository trait for short code mapping storage.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence contract for [`UrlMapping`] records.
///
/// Uniqueness of `short_code` and the hit counter are owned by the store:
/// implementations must enforce the former with a uniqueness constraint and
/// apply the latter as a single atomic update.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlMappingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url_mapping.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlMappingRepository: Send + Sync {
    /// Inserts a new mapping and returns its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code is already taken.
    /// Returns [`AppError::StoreUnavailable`] on database errors.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<i64, AppError>;

    /// Finds a mapping by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Lists mappings, newest first.
    ///
    /// `limit = None` returns every record.
    async fn list_all(&self, limit: Option<i64>) -> Result<Vec<UrlMapping>, AppError>;

    /// Atomically adds one to the hit counter and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record no longer exists.
    async fn increment_access_count(&self, id: i64) -> Result<i64, AppError>;

    /// Replaces the target URL and refreshes `updated_at`.
    ///
    /// The stored `updated_at` is always strictly later than its previous value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `short_code`.
    async fn update_url(
        &self,
        short_code: &str,
        new_url: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<u64, AppError>;

    /// Permanently removes a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches `short_code`.
    async fn delete(&self, short_code: &str) -> Result<u64, AppError>;

    /// Counts stored mappings.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Sums hit counters across all mappings (0 for an empty store).
    async fn sum_access_counts(&self) -> Result<i64, AppError>;
}
