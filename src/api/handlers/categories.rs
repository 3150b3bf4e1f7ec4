//! Handlers for category endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::api::dto::categories::{CategoriesResponse, CategoryDto, CategoryQuestionsResponse};
use crate::api::dto::questions::format_questions;
use crate::error::{AppError, OrStatus};
use crate::state::AppState;

/// Lists every category.
///
/// # Endpoint
///
/// `GET /categories`
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "categories": [{"id": 1, "type": "Science"}, {"id": 2, "type": "Art"}]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 Internal Server Error if categories cannot be loaded.
pub async fn category_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state
        .category_service
        .list_categories()
        .await
        .or_status(AppError::Internal)?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories.into_iter().map(CategoryDto::from).collect(),
    }))
}

/// Lists the questions of one category.
///
/// # Endpoint
///
/// `GET /categories/{category_id}/questions`
///
/// `total_questions` holds every question in storage, unfiltered.
///
/// # Errors
///
/// Returns 400 Bad Request if the category has no questions or storage fails.
/// Returns 404 Not Found if `category_id` is not a non-negative integer.
pub async fn category_questions_handler(
    State(state): State<AppState>,
    category_id: Result<Path<i32>, PathRejection>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let Path(category_id) = category_id.map_err(|_| AppError::NotFound)?;
    if category_id < 0 {
        return Err(AppError::NotFound);
    }

    let questions = state
        .question_service
        .questions_by_category(category_id)
        .await
        .or_status(AppError::BadRequest)?;

    let current_category = questions
        .first()
        .map(|q| q.category)
        .ok_or(AppError::BadRequest)?;

    let all_questions = state
        .question_service
        .list_questions()
        .await
        .or_status(AppError::BadRequest)?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: format_questions(questions),
        total_questions: format_questions(all_questions),
        current_category,
    }))
}
