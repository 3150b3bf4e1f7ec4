//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`QuestionRepository`] - Question queries, inserts and deletes
//! - [`CategoryRepository`] - Read-only category listing
//!
//! All methods report failures as [`RepositoryError`](crate::error::RepositoryError).
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod category_repository;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use question_repository::QuestionRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
