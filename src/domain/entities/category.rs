//! Category entity.

/// A question category such as "Science" or "Art".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    /// Display name, exposed as `type` on the wire.
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}
