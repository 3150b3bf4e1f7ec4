//! Shared application state injected into every handler.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{CategoryService, QuestionService, QuizService};
use crate::infrastructure::persistence::{PgCategoryRepository, PgQuestionRepository};

/// Services backed by the PostgreSQL repositories.
#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService<PgCategoryRepository>>,
    pub question_service: Arc<QuestionService<PgQuestionRepository>>,
    pub quiz_service: Arc<QuizService<PgQuestionRepository>>,
}

impl AppState {
    /// Wires repositories and services over a shared connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let question_repository = Arc::new(PgQuestionRepository::new(pool.clone()));
        let category_repository = Arc::new(PgCategoryRepository::new(pool));

        Self {
            category_service: Arc::new(CategoryService::new(category_repository)),
            question_service: Arc::new(QuestionService::new(question_repository.clone())),
            quiz_service: Arc::new(QuizService::new(question_repository)),
        }
    }

    /// Same as [`AppState::new`] but with a deterministic quiz generator.
    pub fn with_quiz_seed(pool: Arc<PgPool>, seed: u64) -> Self {
        let state = Self::new(pool.clone());
        let question_repository = Arc::new(PgQuestionRepository::new(pool));

        Self {
            quiz_service: Arc::new(QuizService::with_seed(question_repository, seed)),
            ..state
        }
    }
}
