// ABOUTME: Error type for the HTML page endpoints
// ABOUTME: Maps failures to plain-text responses with a matching status code

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, info};

use todoboard_core::ValidationError;
use todoboard_storage::StorageError;

use crate::extract::BodyRejection;

/// Errors returned by handlers that render HTML or redirect
#[derive(Debug, Error)]
pub enum PageError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Body(#[from] BodyRejection),

    #[error("Todo {0} not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Storage(#[from] StorageError),

    #[error("Template error: {0}")]
    Render(#[from] tera::Error),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::Validation(_) => StatusCode::BAD_REQUEST,
            PageError::Body(rejection) => rejection.status(),
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Storage(_) | PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match &self {
            PageError::Storage(err) => error!(error = %err, "Database operation failed"),
            PageError::Render(err) => error!(error = ?err, "Template rendering failed"),
            _ => info!(error = %self, "Rejected request"),
        }

        (self.status(), self.to_string()).into_response()
    }
}

pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            PageError::from(ValidationError::new("title", "title is required")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(PageError::NotFound(7).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            PageError::from(StorageError::Database("locked".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_message_is_prefixed() {
        let err = PageError::from(StorageError::Database("locked".to_string()));
        assert_eq!(err.to_string(), "Database error: locked");
    }
}
