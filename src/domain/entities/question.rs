//! Question entity.

/// A stored trivia question.
///
/// `category` refers to [`super::Category::id`], but the reference is not
/// enforced by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl Question {
    /// Creates a new Question instance.
    pub fn new(
        id: i32,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i32,
        difficulty: i32,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }
}

/// Input data for inserting a question.
///
/// Missing fields stay `None` and are written as NULL, leaving it to the
/// table constraints to reject the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new(5, "Who invented Peanut Butter?", "George Washington Carver", 4, 2);

        assert_eq!(q.id, 5);
        assert_eq!(q.question, "Who invented Peanut Butter?");
        assert_eq!(q.answer, "George Washington Carver");
        assert_eq!(q.category, 4);
        assert_eq!(q.difficulty, 2);
    }
}
