//! Repository trait for category data access.

use crate::domain::entities::Category;
use crate::error::RepositoryError;
use async_trait::async_trait;

/// Read-only access to question categories.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Lists every category in storage order (ascending id).
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on database errors.
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;
}
