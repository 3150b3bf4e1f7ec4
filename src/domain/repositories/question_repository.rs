//! Repository trait for question data access.

use crate::domain::entities::{NewQuestion, Question};
use crate::error::RepositoryError;
use async_trait::async_trait;

/// Repository interface for trivia questions.
///
/// Every list operation returns questions ordered by ascending id.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgQuestionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_question.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Lists every question.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on database errors.
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError>;

    /// Finds a question by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Question))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on database errors.
    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, RepositoryError>;

    /// Inserts a new question and returns the stored row.
    ///
    /// `None` fields are written as NULL.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::ConstraintViolation`] if the row is rejected
    /// by a table constraint.
    /// Returns [`RepositoryError::Query`] on other database errors.
    async fn create(&self, new_question: NewQuestion) -> Result<Question, RepositoryError>;

    /// Permanently deletes a question.
    ///
    /// Returns `false` when no row had the given id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on database errors.
    async fn delete(&self, id: i32) -> Result<bool, RepositoryError>;

    /// Finds questions whose text contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on database errors.
    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError>;

    /// Lists questions belonging to a category.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on database errors.
    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, RepositoryError>;

    /// Lists quiz candidates: questions not in `exclude`, optionally restricted
    /// to one category.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Query`] on database errors.
    async fn list_quiz_candidates(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> Result<Vec<Question>, RepositoryError>;
}
