use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    EmptyResponse(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Llm(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Status code and client-facing message. Server-side failures are logged here.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Config(msg) | AppError::Validation(msg) | AppError::EmptyResponse(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render page: {e}"),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_400() {
        for err in [
            AppError::Config("no key".to_string()),
            AppError::Validation("bad body".to_string()),
            AppError::EmptyResponse("blocked".to_string()),
        ] {
            assert_eq!(err.status_and_message().0, StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let (status, message) = AppError::NotFound("nothing".to_string()).status_and_message();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(message, "nothing");
    }

    #[test]
    fn test_upstream_and_internal_map_to_500() {
        let (status, message) = AppError::Llm("boom".to_string()).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "boom");

        let (status, _) = AppError::Internal(anyhow::anyhow!("disk")).status_and_message();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
