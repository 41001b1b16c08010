// ABOUTME: JSON acknowledgment envelope for mutation endpoints
// ABOUTME: `{success: true}` on success, `{success: false, error}` on failure

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use todoboard_core::ValidationError;
use todoboard_storage::StorageError;

use crate::extract::BodyRejection;

/// Standard API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success() -> Self {
        ApiResponse {
            success: true,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Errors returned by the JSON endpoints
#[derive(Debug, Error)]
pub enum JsonError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Body(#[from] BodyRejection),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl JsonError {
    fn status(&self) -> StatusCode {
        match self {
            JsonError::Validation(_) => StatusCode::BAD_REQUEST,
            JsonError::Body(rejection) => rejection.status(),
            JsonError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert endpoint errors to HTTP responses
impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        match &self {
            JsonError::Storage(err) => error!(error = %err, "Database operation failed"),
            _ => info!(error = %self, "Rejected request"),
        }

        (
            self.status(),
            ResponseJson(ApiResponse::error(self.to_string())),
        )
            .into_response()
    }
}

pub type JsonResult = Result<ResponseJson<ApiResponse>, JsonError>;

/// Acknowledge a successful mutation
pub fn acknowledge() -> JsonResult {
    Ok(ResponseJson(ApiResponse::success()))
}
