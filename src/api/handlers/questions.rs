//! Handlers for question endpoints (list, create, delete, search).

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};

use crate::api::dto::pagination::PageParams;
use crate::api::dto::questions::{
    CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse, QuestionDto,
    QuestionListResponse, SearchRequest, SearchResponse, format_questions,
};
use crate::domain::pagination::paginate;
use crate::error::{AppError, OrStatus};
use crate::state::AppState;

/// Lists questions ten at a time.
///
/// # Endpoint
///
/// `GET /questions?page=N`
///
/// # Query Parameters
///
/// - `page` (optional): 1-based page number; missing or non-integer means 1.
///   A query string that cannot be parsed at all (e.g. a repeated `page`) is
///   treated as no query string.
///
/// # Response
///
/// `categories` is a flat list of category names and `total_questions` is the
/// number of questions across all pages.
///
/// # Errors
///
/// Returns 400 Bad Request if questions cannot be loaded.
/// Returns 404 Not Found if the requested page is empty.
pub async fn question_list_handler(
    State(state): State<AppState>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionListResponse>, AppError> {
    let params = params.map(|Query(p)| p).unwrap_or_default();

    let questions = state
        .question_service
        .list_questions()
        .await
        .or_status(AppError::BadRequest)?;

    let total_questions = questions.len();
    let page = paginate(format_questions(questions), params.page());

    if page.is_empty() {
        return Err(AppError::NotFound);
    }

    let categories = state
        .category_service
        .list_category_types()
        .await
        .or_status(AppError::Internal)?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: page,
        categories,
        total_questions,
    }))
}

/// Permanently deletes a question.
///
/// # Endpoint
///
/// `DELETE /questions/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the question does not exist, if `id` is not an
/// integer, or if the lookup or delete fails for any other reason.
pub async fn delete_question_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let Path(id) = id.map_err(|_| AppError::NotFound)?;

    state
        .question_service
        .delete_question(id)
        .await
        .or_status(AppError::NotFound)?;

    Ok(Json(DeleteQuestionResponse { success: true }))
}

/// Creates a question.
///
/// # Endpoint
///
/// `POST /questions`
///
/// # Request Body
///
/// ```json
/// {
///   "question": "Who discovered penicillin?",
///   "answer": "Alexander Fleming",
///   "category": 1,
///   "difficulty": 3
/// }
/// ```
///
/// Fields are not validated; missing ones are stored as NULL and rejected by
/// the table constraints.
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body cannot be parsed or the
/// insert fails.
pub async fn create_question_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreateQuestionResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected question body");
        AppError::UnprocessableEntity
    })?;

    let created = state
        .question_service
        .create_question(payload.into())
        .await
        .or_status(AppError::UnprocessableEntity)?;

    let questions = state
        .question_service
        .list_questions()
        .await
        .or_status(AppError::UnprocessableEntity)?;

    Ok(Json(CreateQuestionResponse {
        success: true,
        question: created.question,
        answer: created.answer,
        current_category: created.category,
        difficulty: created.difficulty,
        questions: paginate(format_questions(questions), 1),
    }))
}

/// Searches question text, ignoring case.
///
/// # Endpoint
///
/// `POST /questions/search`
///
/// # Request Body
///
/// ```json
/// { "searchTerm": "title" }
/// ```
///
/// `current_question` and `current_category` describe the first match;
/// `total_questions` holds every question in storage, unfiltered.
///
/// # Errors
///
/// Returns 400 Bad Request if nothing matches, the body cannot be parsed, or
/// storage fails.
pub async fn search_questions_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected search body");
        AppError::BadRequest
    })?;

    let matches = format_questions(
        state
            .question_service
            .search_questions(&payload.search_term)
            .await
            .or_status(AppError::BadRequest)?,
    );

    let current_question: QuestionDto = matches.first().cloned().ok_or(AppError::BadRequest)?;

    let all_questions = state
        .question_service
        .list_questions()
        .await
        .or_status(AppError::BadRequest)?;

    Ok(Json(SearchResponse {
        success: true,
        current_category: current_question.category,
        current_question,
        questions: matches,
        total_questions: format_questions(all_questions),
    }))
}
