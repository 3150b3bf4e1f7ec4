//! Quiz request and response DTOs.

use serde::{Deserialize, Serialize};

use crate::api::dto::questions::QuestionDto;

/// Request body for `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    /// Category id, or `0` for any category.
    pub quiz_category: i32,
}

/// Response for `POST /quizzes`.
///
/// When no unseen question remains only `success: false` is sent.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Next {
        success: bool,
        question: QuestionDto,
        #[serde(rename = "previousQuestions")]
        previous_questions: Vec<i32>,
        guess: String,
        #[serde(rename = "showAnswer")]
        show_answer: bool,
    },
    Exhausted {
        success: bool,
    },
}

impl QuizResponse {
    pub fn next(question: QuestionDto, previous_questions: Vec<i32>) -> Self {
        QuizResponse::Next {
            success: true,
            question,
            previous_questions,
            guess: String::new(),
            show_answer: false,
        }
    }

    pub fn exhausted() -> Self {
        QuizResponse::Exhausted { success: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_exhausted_shape() {
        assert_eq!(
            serde_json::to_value(QuizResponse::exhausted()).unwrap(),
            json!({"success": false})
        );
    }

    #[test]
    fn test_next_shape() {
        let question = QuestionDto {
            id: 10,
            question: "Which is the only team to play in every soccer World Cup tournament?".into(),
            answer: "Brazil".into(),
            category: 6,
            difficulty: 3,
        };

        let value = serde_json::to_value(QuizResponse::next(question, vec![11])).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["question"]["id"], 10);
        assert_eq!(value["previousQuestions"], json!([11]));
        assert_eq!(value["guess"], "");
        assert_eq!(value["showAnswer"], false);
    }

    #[test]
    fn test_request_requires_both_fields() {
        assert!(serde_json::from_value::<QuizRequest>(json!({"quiz_category": 0})).is_err());
        assert!(serde_json::from_value::<QuizRequest>(json!({"previous_questions": []})).is_err());

        let req: QuizRequest =
            serde_json::from_value(json!({"previous_questions": [1, 2], "quiz_category": 3})).unwrap();
        assert_eq!(req.previous_questions, vec![1, 2]);
        assert_eq!(req.quiz_category, 3);
    }
}
