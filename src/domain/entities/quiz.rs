//! Quiz category selector.

/// Restricts which questions a quiz may draw from.
///
/// On the wire the selector is a plain integer where `0` means
/// "any category".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Any,
    Category(i32),
}

impl QuizCategory {
    /// The category id to filter on, or `None` when unrestricted.
    pub fn category_id(self) -> Option<i32> {
        match self {
            QuizCategory::Any => None,
            QuizCategory::Category(id) => Some(id),
        }
    }
}

impl From<i32> for QuizCategory {
    fn from(id: i32) -> Self {
        if id == 0 {
            QuizCategory::Any
        } else {
            QuizCategory::Category(id)
        }
    }
}
