use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assist::error::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Assist(#[from] PipelineError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Assist(PipelineError::Validation(e)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string())
            }
            // Generation and schema failures look identical to clients; the
            // assist handler's log keeps them apart.
            AppError::Assist(PipelineError::Generation(_) | PipelineError::SchemaMismatch(_)) => (
                StatusCode::BAD_GATEWAY,
                "GENERATION_FAILED",
                "Generation failed. Please try again.".to_string(),
            ),
            AppError::Assist(PipelineError::Template(_)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            ),
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
    use crate::assist::error::{
        GenerationError, SchemaMismatchError, TemplateError, ValidationError,
    };
    use crate::llm_client::LlmError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::from(PipelineError::from(ValidationError {
            field: "description",
        }));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_and_schema_failures_share_status() {
        let generation = AppError::from(PipelineError::from(GenerationError(
            LlmError::EmptyContent,
        )));
        let mismatch = AppError::from(PipelineError::from(SchemaMismatchError::NotAnObject));
        assert_eq!(generation.into_response().status(), StatusCode::BAD_GATEWAY);
        assert_eq!(mismatch.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_template_misconfiguration_is_server_error() {
        let err = AppError::from(PipelineError::from(TemplateError::UnusedField("text".to_string())));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found() {
        let err = AppError::NotFound("Project x not found".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
