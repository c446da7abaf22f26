use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;
use crate::normalize::NormalizeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    ExtractionFailed(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Invalid model output: {0}")]
    InvalidModelOutput(#[from] NormalizeError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(msg) => AppError::UnsupportedFormat(msg),
            ExtractError::ExtractionFailed(msg) => AppError::ExtractionFailed(msg),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::UnsupportedFormat(_)
            | AppError::ExtractionFailed(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::InvalidModelOutput(_) | AppError::Llm(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedFormat(msg) => ("UNSUPPORTED_FORMAT", msg.clone()),
            AppError::ExtractionFailed(msg) => ("EXTRACTION_FAILED", msg.clone()),
            AppError::PayloadTooLarge(msg) => ("PAYLOAD_TOO_LARGE", msg.clone()),
            AppError::InvalidModelOutput(e) => {
                tracing::error!("Invalid model output: {e}");
                (
                    "INVALID_MODEL_OUTPUT",
                    "The AI service returned an unreadable response. Please try again.".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": code,
        }));

        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_errors_map_to_bad_request() {
        let unsupported: AppError = ExtractError::UnsupportedFormat("no .doc".into()).into();
        let failed: AppError = ExtractError::ExtractionFailed("corrupt".into()).into();
        assert_eq!(unsupported.status(), StatusCode::BAD_REQUEST);
        assert_eq!(failed.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_model_errors_map_to_server_error() {
        let err: AppError = LlmError::EmptyContent.into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: AppError = NormalizeError::UnexpectedShape("not an object".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_oversized_upload_maps_to_payload_too_large() {
        let err = AppError::PayloadTooLarge("File too large".into());
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_error_body_carries_message_and_code() {
        let response = AppError::Validation("Job description is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Job description is required");
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }
}
