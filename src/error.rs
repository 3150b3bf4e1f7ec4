//! Error types for the data-access and HTTP boundaries.
//!
//! Repositories report one of three [`RepositoryError`] kinds. Handlers never
//! forward those kinds to clients: each endpoint coerces any repository failure
//! into a single fixed [`AppError`], which renders the JSON error envelope.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::error::ErrorKind;

/// Failure kinds reported by repository implementations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,

    /// A write was rejected by a table constraint (NOT NULL, UNIQUE, CHECK, ...).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// The query could not be executed.
    #[error("query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = e {
            return Self::NotFound;
        }

        if let Some(db) = e.as_database_error() {
            return match db.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation(db.message().to_string()),
                _ => Self::Query(db.message().to_string()),
            };
        }

        Self::Query(e.to_string())
    }
}

/// HTTP-level errors, one per status code of the public API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    UnprocessableEntity,
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl AppError {
    pub fn status(self) -> StatusCode {
        match self {
            AppError::BadRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AppError::BadRequest => "Bad request",
            AppError::NotFound => "Resource not found",
            AppError::MethodNotAllowed => "Method not allowed",
            AppError::UnprocessableEntity => "Unprocessable entity",
            AppError::Internal => "Internal server error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Coerces a repository result into a fixed HTTP error.
///
/// The original failure kind is logged and then discarded, so a transient
/// storage error and a missing record look identical to the client.
pub trait OrStatus<T> {
    fn or_status(self, status: AppError) -> Result<T, AppError>;
}

impl<T> OrStatus<T> for Result<T, RepositoryError> {
    fn or_status(self, status: AppError) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!(
                error = %e,
                status = %status.status(),
                "Storage failure coerced to fixed status"
            );
            status
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_error_envelopes() {
        let cases = [
            (AppError::BadRequest, 400, "Bad request"),
            (AppError::NotFound, 404, "Resource not found"),
            (AppError::MethodNotAllowed, 405, "Method not allowed"),
            (AppError::UnprocessableEntity, 422, "Unprocessable entity"),
            (AppError::Internal, 500, "Internal server error"),
        ];

        for (err, code, message) in cases {
            let (status, body) = render(err).await;
            assert_eq!(status.as_u16(), code);
            assert_eq!(body["success"], false);
            assert_eq!(body["error"], code);
            assert_eq!(body["message"], message);
        }
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn test_pool_errors_map_to_query() {
        let err = RepositoryError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Query(_)));
    }

    #[test]
    fn test_or_status_ignores_error_kind() {
        let missing: Result<(), RepositoryError> = Err(RepositoryError::NotFound);
        let broken: Result<(), RepositoryError> = Err(RepositoryError::Query("boom".into()));

        assert_eq!(missing.or_status(AppError::BadRequest), Err(AppError::BadRequest));
        assert_eq!(broken.or_status(AppError::BadRequest), Err(AppError::BadRequest));
    }

    #[test]
    fn test_or_status_passes_values_through() {
        let ok: Result<i32, RepositoryError> = Ok(7);
        assert_eq!(ok.or_status(AppError::NotFound), Ok(7));
    }
}
