//! Category service.

use crate::domain::entities::Category;
use crate::domain::repositories::CategoryRepository;
use crate::error::RepositoryError;
use std::sync::Arc;

/// Service for reading question categories.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    /// Creates a new category service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all categories in storage order.
    pub async fn list_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        self.repository.list().await
    }

    /// Lists category display names in storage order.
    pub async fn list_category_types(&self) -> Result<Vec<String>, RepositoryError> {
        let categories = self.repository.list().await?;
        Ok(categories.into_iter().map(|c| c.kind).collect())
    }
}
