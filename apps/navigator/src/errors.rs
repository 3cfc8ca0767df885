use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::schema::SchemaError;

/// Failure of a pipeline run. Every variant aborts the run; nothing is recovered locally.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("External service error: {0}")]
    ExternalService(#[from] LlmError),

    #[error("Search unavailable: {0}")]
    SearchUnavailable(String),

    #[error("Failed to serialize pipeline data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Pipeline(PipelineError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Pipeline(PipelineError::Schema(e)) => {
                tracing::error!("Schema error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_ERROR",
                    "The AI service returned data in an unexpected format".to_string(),
                )
            }
            AppError::Pipeline(PipelineError::ExternalService(e)) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Pipeline(PipelineError::SearchUnavailable(msg)) => {
                tracing::error!("Search unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SEARCH_UNAVAILABLE",
                    "Live market research is currently unavailable".to_string(),
                )
            }
            AppError::Pipeline(PipelineError::Serialization(e)) => {
                tracing::error!("Serialization error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_pipeline_errors_map_to_gateway_statuses() {
        assert_eq!(
            status_of(PipelineError::InvalidInput("blank".to_string()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(
                PipelineError::Schema(SchemaError::Empty {
                    schema: "MarketProfile"
                })
                .into()
            ),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(PipelineError::ExternalService(LlmError::EmptyContent).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(PipelineError::SearchUnavailable("down".to_string()).into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_validation_and_pdf_errors() {
        assert_eq!(
            status_of(AppError::Validation("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::UnprocessableEntity("bad pdf".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn test_serialization_failure_is_internal_and_not_echoed() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = AppError::from(PipelineError::Serialization(serde_err)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }
}
