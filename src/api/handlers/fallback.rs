//! Fallback handlers for unmatched routes and methods.

use crate::error::AppError;

/// Answers requests whose path matches no route.
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

/// Answers requests whose path matches but whose method does not.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
