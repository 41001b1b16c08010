// ABOUTME: Request body extractor accepting form-encoded or JSON payloads
// ABOUTME: HTML forms post urlencoded bodies while the client script sends JSON

use axum::{
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Body deserialized from either `application/x-www-form-urlencoded` or
/// `application/json`, chosen by the request's content type
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

#[derive(Debug, Error)]
pub enum BodyRejection {
    #[error("Expected a form-encoded or JSON request body")]
    UnsupportedMediaType,

    #[error("Invalid request body: {0}")]
    Invalid(String),
}

impl BodyRejection {
    pub fn status(&self) -> StatusCode {
        match self {
            BodyRejection::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            BodyRejection::Invalid(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| BodyRejection::Invalid(e.body_text()))?;
            Ok(FormOrJson(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| BodyRejection::Invalid(e.body_text()))?;
            Ok(FormOrJson(value))
        } else {
            Err(BodyRejection::UnsupportedMediaType)
        }
    }
}
