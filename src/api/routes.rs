//! API route configuration.

use crate::api::handlers::{
    category_list_handler, category_questions_handler, create_question_handler,
    delete_question_handler, question_list_handler, quiz_handler, search_questions_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All trivia API routes.
///
/// # Endpoints
///
/// - `GET    /categories`                         - List categories
/// - `GET    /categories/{category_id}/questions` - Questions of one category
/// - `GET    /questions?page=N`                   - Paginated question list
/// - `POST   /questions`                          - Create a question
/// - `POST   /questions/search`                   - Search question text
/// - `DELETE /questions/{id}`                     - Delete a question
/// - `POST   /quizzes`                            - Next random unseen question
///
/// The two list endpoints also answer with a trailing slash.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(category_list_handler))
        .route("/categories/", get(category_list_handler))
        .route(
            "/categories/{category_id}/questions",
            get(category_questions_handler),
        )
        .route(
            "/questions",
            get(question_list_handler).post(create_question_handler),
        )
        .route("/questions/", get(question_list_handler))
        .route("/questions/search", post(search_questions_handler))
        .route("/questions/{id}", delete(delete_question_handler))
        .route("/quizzes", post(quiz_handler))
}
