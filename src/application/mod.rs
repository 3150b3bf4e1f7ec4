//! Application layer services.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::category_service::CategoryService`] - Category listing
//! - [`services::question_service::QuestionService`] - Question listing, search, create and delete
//! - [`services::quiz_service::QuizService`] - Random unseen question selection

pub mod services;
