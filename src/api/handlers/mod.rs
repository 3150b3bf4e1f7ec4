//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints. Every
//! handler coerces storage failures into the single status its endpoint uses.

pub mod categories;
pub mod fallback;
pub mod health;
pub mod questions;
pub mod quizzes;

pub use categories::{category_list_handler, category_questions_handler};
pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use questions::{
    create_question_handler, delete_question_handler, question_list_handler,
    search_questions_handler,
};
pub use quizzes::quiz_handler;
