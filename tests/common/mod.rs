#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use trivia_api::routes::app_router;
use trivia_api::state::AppState;

/// Questions inserted by the seed migration.
pub const SEEDED_QUESTIONS: usize = 19;

/// Categories inserted by the seed migration.
pub const SEEDED_CATEGORIES: usize = 6;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::with_quiz_seed(Arc::new(pool), 42)
}

/// Full application router, including fallbacks and middleware.
pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(app_router(create_test_state(pool))).unwrap()
}

pub async fn insert_question(
    pool: &PgPool,
    question: &str,
    answer: &str,
    category: i32,
    difficulty: i32,
) -> i32 {
    sqlx::query_scalar(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn question_exists(pool: &PgPool, id: i32) -> bool {
    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM questions WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn clear_questions(pool: &PgPool) {
    sqlx::query("DELETE FROM questions")
        .execute(pool)
        .await
        .unwrap();
}

pub async fn clear_categories(pool: &PgPool) {
    sqlx::query("DELETE FROM categories")
        .execute(pool)
        .await
        .unwrap();
}
