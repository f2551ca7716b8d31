//! Repository trait for short key to URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an insert attempt against the unique-key constraint.
#[derive(Debug, Clone)]
pub enum InsertOutcome {
    /// The row was written; carries the stored mapping including its
    /// database-assigned creation timestamp.
    Inserted(UrlMapping),
    /// Another mapping already holds this key. Nothing was written.
    AlreadyExists,
}

/// Repository interface for the durable key-to-URL mapping.
///
/// The store itself enforces key uniqueness (via its constraint mechanism);
/// callers never serialize inserts at the application level.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryMappingRepository`] - in-memory,
///   for integration tests and local runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Point lookup by short key. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] when the store cannot be
    /// reached or the operation times out.
    async fn find_by_key(&self, key: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Inserts a new mapping, failing softly when the key is taken.
    ///
    /// Safe under concurrent callers inserting the same key: at most one
    /// insert wins, the rest observe [`InsertOutcome::AlreadyExists`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on storage failure.
    async fn insert(&self, new_mapping: NewUrlMapping) -> Result<InsertOutcome, AppError>;

    /// Idempotent storage initialization, invoked once at process startup
    /// before any request is served.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] when initialization fails.
    async fn ensure_schema(&self) -> Result<(), AppError>;
}
