use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ferriskitchen_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    ValidationError(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadGateway(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub status: i64,
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::GenerationInProgress => ApiError::Conflict(error.to_string()),
            // Kitchen::generate folds these into `GenerationStatus::Failed`; the arm
            // keeps the mapping total for handlers that call the service directly.
            CoreError::EmptyResponse
            | CoreError::MalformedResponse(_)
            | CoreError::TransportError(_) => ApiError::BadGateway(error.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::ValidationError(_) => (StatusCode::UNPROCESSABLE_ENTITY, "E_VALIDATION"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "E_CONFLICT"),
            ApiError::BadGateway(_) => (StatusCode::BAD_GATEWAY, "E_GENERATION_FAILED"),
        };

        let body = ErrorResponse {
            code: code.to_string(),
            message: self.to_string(),
            status: i64::from(status.as_u16()),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that also runs `validator` rules.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::ValidationError(e.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let conflict = ApiError::from(CoreError::GenerationInProgress).into_response();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let gateway =
            ApiError::from(CoreError::MalformedResponse("[0]: bad".to_string())).into_response();
        assert_eq!(gateway.status(), StatusCode::BAD_GATEWAY);
    }
}
