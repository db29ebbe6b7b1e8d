//! Custom error types for the students service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Custom error type for the students service
#[derive(Error, Debug)]
pub enum ApiError {
    /// A payload failed structural validation
    #[error("values provided are invalid")]
    Validation,

    /// No student has the given ID
    #[error("Student with id {0} was not found")]
    NotFound(i32),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] common::error::DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(e) => {
                tracing::error!("Database error while handling request: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = match self {
            ApiError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        (status, Json(message)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::Validation.to_string(), "values provided are invalid");
        assert_eq!(
            ApiError::NotFound(99).to_string(),
            "Student with id 99 was not found"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound(1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(common::error::DatabaseError::Configuration("x".to_string()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
