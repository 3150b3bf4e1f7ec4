//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the public JSON contract, which mixes `snake_case`
//! and `camelCase` keys; renames are explicit on each field.

pub mod categories;
pub mod health;
pub mod pagination;
pub mod questions;
pub mod quizzes;
