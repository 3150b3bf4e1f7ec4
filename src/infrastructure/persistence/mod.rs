//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` and decoded through
//! `FromRow` row types, so the crate builds without a live database.
//!
//! # Repositories
//!
//! - [`PgQuestionRepository`] - Question storage, search and quiz candidates
//! - [`PgCategoryRepository`] - Category listing

pub mod pg_category_repository;
pub mod pg_question_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_question_repository::PgQuestionRepository;
