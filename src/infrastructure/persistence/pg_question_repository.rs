//! PostgreSQL implementation of question repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewQuestion, Question};
use crate::domain::repositories::QuestionRepository;
use crate::error::RepositoryError;

/// PostgreSQL repository for trivia questions.
///
/// Deletes are permanent; there is no soft-delete column.
pub struct PgQuestionRepository {
    pool: Arc<PgPool>,
}

impl PgQuestionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct QuestionRow {
    id: i32,
    question: String,
    answer: String,
    category: i32,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(row: QuestionRow) -> Self {
        Question::new(row.id, row.question, row.answer, row.category, row.difficulty)
    }
}

/// Escapes `LIKE` metacharacters so the term is matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn into_questions(rows: Vec<QuestionRow>) -> Vec<Question> {
    rows.into_iter().map(Question::from).collect()
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>, RepositoryError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(into_questions(rows))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Question>, RepositoryError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Question::from))
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, RepositoryError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(new_question.question)
        .bind(new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn delete(&self, id: i32) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, RepositoryError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(escape_like(term))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(into_questions(rows))
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<Question>, RepositoryError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(into_questions(rows))
    }

    async fn list_quiz_candidates(
        &self,
        exclude: &[i32],
        category_id: Option<i32>,
    ) -> Result<Vec<Question>, RepositoryError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE NOT (id = ANY($1))
              AND ($2::INTEGER IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(exclude)
        .bind(category_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(into_questions(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_text_unchanged() {
        assert_eq!(escape_like("World Cup"), "World Cup");
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\path"), "c:\\\\path");
    }
}
