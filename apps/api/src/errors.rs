use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Message shown when no OpenAI key is configured or supplied.
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Please enter your OpenAI API key to proceed.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Please enter your OpenAI API key to proceed.")]
    MissingCredential,

    /// Every completion-call failure lands here; network, auth, rate limit
    /// and malformed bodies are not distinguished.
    #[error("An error occurred: {0}")]
    Completion(#[from] LlmError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                "MISSING_CREDENTIAL",
                MISSING_CREDENTIAL_MESSAGE.to_string(),
            ),
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                (StatusCode::BAD_GATEWAY, "COMPLETION_ERROR", self.to_string())
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

    #[test]
    fn test_missing_credential_maps_to_unauthorized() {
        let response = AppError::MissingCredential.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_completion_error_message_carries_underlying_text() {
        let err = AppError::Completion(LlmError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "An error occurred: API error (status 429): Rate limit reached"
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("weight must be >= 0".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
