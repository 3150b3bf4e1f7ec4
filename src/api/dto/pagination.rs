//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};

/// `?page=N` query parameter.
///
/// A missing or non-integer value falls back to the first page instead of
/// rejecting the request.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,
}

impl PageParams {
    /// Returns the requested 1-based page, defaulting to 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}
