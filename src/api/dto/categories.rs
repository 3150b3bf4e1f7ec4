//! Category DTOs.

use serde::Serialize;

use crate::api::dto::questions::QuestionDto;
use crate::domain::entities::Category;

/// A category as exposed by the API: `{id, type}`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            kind: category.kind,
        }
    }
}

/// Response for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CategoryDto>,
}

/// Response for `GET /categories/{category_id}/questions`.
///
/// `total_questions` carries every question, not a count.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: Vec<QuestionDto>,
    pub current_category: i32,
}
