//! Repository trait for analyzed string storage.

use crate::domain::entities::{AnalyzedString, NewAnalyzedString};
use crate::domain::filter::StringFilter;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for analyzed strings.
///
/// Implementations must enforce uniqueness of both the content hash (`id`)
/// and the raw `value`, and must do so atomically: of several concurrent
/// inserts for the same value exactly one succeeds.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgStringRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryStringRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StringRepository: Send + Sync {
    /// Stores a new analyzed string and assigns its `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same id or value
    /// already exists. The store is left unchanged.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_string: NewAnalyzedString) -> Result<AnalyzedString, AppError>;

    /// Finds a record by exact value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_value(&self, value: &str) -> Result<Option<AnalyzedString>, AppError>;

    /// Deletes a record by exact value.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete_by_value(&self, value: &str) -> Result<bool, AppError>;

    /// Lists every record matching `filter`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, filter: StringFilter) -> Result<Vec<AnalyzedString>, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
