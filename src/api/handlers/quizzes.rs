//! Handler for the quiz endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::api::dto::questions::QuestionDto;
use crate::api::dto::quizzes::{QuizRequest, QuizResponse};
use crate::error::{AppError, OrStatus};
use crate::state::AppState;

/// Returns a random question the player has not seen yet.
///
/// # Endpoint
///
/// `POST /quizzes`
///
/// # Request Body
///
/// ```json
/// { "previous_questions": [5, 9], "quiz_category": 4 }
/// ```
///
/// `quiz_category` of `0` draws from every category.
///
/// # Response
///
/// Once every eligible question has been seen the response is
/// `{"success": false}` with status 200.
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be parsed or storage fails.
pub async fn quiz_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected quiz body");
        AppError::BadRequest
    })?;

    let next = state
        .quiz_service
        .next_question(&payload.previous_questions, payload.quiz_category.into())
        .await
        .or_status(AppError::BadRequest)?;

    let response = match next {
        Some(question) => {
            QuizResponse::next(QuestionDto::from(question), payload.previous_questions)
        }
        None => QuizResponse::exhausted(),
    };

    Ok(Json(response))
}
