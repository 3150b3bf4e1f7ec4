//! Question request and response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewQuestion, Question};

/// A formatted question: `{id, question, answer, category, difficulty}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Formats a list of questions, preserving order.
pub fn format_questions(questions: Vec<Question>) -> Vec<QuestionDto> {
    questions.into_iter().map(QuestionDto::from).collect()
}

/// Response for `GET /questions`.
///
/// `categories` is a flat list of category names, unlike `GET /categories`.
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub categories: Vec<String>,
    pub total_questions: usize,
}

/// Request body for `POST /questions`.
///
/// Every field is optional; absent fields are stored as NULL.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

/// Response for `POST /questions`.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub question: String,
    pub answer: String,
    pub current_category: i32,
    pub difficulty: i32,
    pub questions: Vec<QuestionDto>,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
}

/// Request body for `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

/// Response for `POST /questions/search`.
///
/// `total_questions` carries every question, not a count.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: Vec<QuestionDto>,
    pub current_category: i32,
    pub current_question: QuestionDto,
}
