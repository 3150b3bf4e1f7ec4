//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Question`] - A trivia question with its answer, category and difficulty
//! - [`Category`] - A named question category
//! - [`QuizCategory`] - The category filter used when drawing quiz questions
//!
//! `NewQuestion` carries the insert payload. Its fields are optional because
//! request bodies are passed through to storage without field validation.

pub mod category;
pub mod question;
pub mod quiz;

pub use category::Category;
pub use question::{NewQuestion, Question};
pub use quiz::QuizCategory;
