//! Domain layer containing the trivia data model and data-access contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Questions, categories and the quiz category selector
//! - [`pagination`] - Fixed-size page slicing over ordered question lists
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented by [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].

pub mod entities;
pub mod pagination;
pub mod repositories;
