//! Question management service.

use crate::domain::entities::{NewQuestion, Question};
use crate::domain::repositories::QuestionRepository;
use crate::error::RepositoryError;
use std::sync::Arc;

/// Service for listing, searching, creating and deleting questions.
pub struct QuestionService<R: QuestionRepository> {
    repository: Arc<R>,
}

impl<R: QuestionRepository> QuestionService<R> {
    /// Creates a new question service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every question ordered by id.
    pub async fn list_questions(&self) -> Result<Vec<Question>, RepositoryError> {
        self.repository.list_all().await
    }

    /// Retrieves a question by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no question has this id.
    pub async fn get_question(&self, id: i32) -> Result<Question, RepositoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// Inserts a question exactly as received.
    ///
    /// No field validation happens here; incomplete input is rejected by
    /// storage as a [`RepositoryError::ConstraintViolation`].
    pub async fn create_question(
        &self,
        new_question: NewQuestion,
    ) -> Result<Question, RepositoryError> {
        let question = self.repository.create(new_question).await?;
        tracing::info!(id = question.id, category = question.category, "Question created");
        Ok(question)
    }

    /// Permanently deletes a question.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if the question does not exist,
    /// including when it disappears between lookup and delete.
    pub async fn delete_question(&self, id: i32) -> Result<(), RepositoryError> {
        self.get_question(id).await?;

        if !self.repository.delete(id).await? {
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(id, "Question deleted");
        Ok(())
    }

    /// Finds questions whose text contains `term`, ignoring case.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        self.repository.search(term).await
    }

    /// Lists the questions of one category.
    pub async fn questions_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<Question>, RepositoryError> {
        self.repository.list_by_category(category_id).await
    }
}
