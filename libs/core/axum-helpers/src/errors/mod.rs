pub mod handlers;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;
use utoipa::ToSchema;

/// Message used for server-side failures when the handler gives no better one.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Message used when a request body cannot be parsed.
pub const INVALID_BODY: &str = "Invalid request body";

/// Body of every error response.
///
/// `message` is always present. `error` carries the underlying failure text for
/// server-side errors and for unparseable request bodies.
///
/// ```json
/// { "message": "Error registering user", "error": "connection reset by peer" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
    /// Raw failure detail, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; it is the only place that decides
/// status codes and response bodies.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    /// A server-side failure with the default message.
    pub fn internal(detail: impl Display) -> Self {
        AppError::Internal {
            message: INTERNAL_ERROR.to_string(),
            detail: detail.to_string(),
        }
    }

    /// Replace the client-facing message of a server-side failure.
    ///
    /// Client errors keep their own message.
    pub fn with_failure_message(self, message: impl Into<String>) -> Self {
        match self {
            AppError::Internal { detail, .. } => AppError::Internal {
                message: message.into(),
                detail,
            },
            other => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_),
            ) => StatusCode::BAD_REQUEST,
            AppError::JsonExtractorRejection(e) => e.status(),
            AppError::InvalidBody(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                ErrorResponse::with_error(INVALID_BODY, e.body_text())
            }
            AppError::InvalidBody(e) => {
                tracing::warn!("Invalid JSON body: {}", e);
                ErrorResponse::with_error(INVALID_BODY, e.to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                ErrorResponse::new(msg)
            }
            AppError::Unauthorized(msg) => {
                tracing::info!("Unauthorized: {}", msg);
                ErrorResponse::new(msg)
            }
            AppError::Internal { message, detail } => {
                tracing::error!(error = %detail, "{}", message);
                ErrorResponse::with_error(message, detail)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Attach an endpoint-specific message to server-side failures.
///
/// ```ignore
/// let feedback = service
///     .list_feedback()
///     .await
///     .on_failure("Error fetching feedbacks")?;
/// ```
pub trait ErrorContext<T> {
    fn on_failure(self, message: &str) -> Result<T, AppError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn on_failure(self, message: &str) -> Result<T, AppError> {
        self.map_err(|e| e.into().with_failure_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_of(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_has_message_only() {
        let (status, body) = body_of(AppError::BadRequest("Email already exists".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "message": "Email already exists" }));
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_401() {
        let (status, body) = body_of(AppError::Unauthorized("Invalid credentials".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_internal_exposes_raw_error() {
        let (status, body) = body_of(AppError::internal("server selection timeout")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], INTERNAL_ERROR);
        assert_eq!(body["error"], "server selection timeout");
    }

    #[tokio::test]
    async fn test_invalid_body_is_client_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let (status, body) = body_of(AppError::from(parse_error)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], INVALID_BODY);
        assert!(body["error"].is_string());
    }

    #[test]
    fn test_on_failure_rewrites_internal_message() {
        let result: Result<(), AppError> = Err(AppError::internal("socket closed"));
        match result.on_failure("Error saving address") {
            Err(AppError::Internal { message, detail }) => {
                assert_eq!(message, "Error saving address");
                assert_eq!(detail, "socket closed");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_on_failure_keeps_client_errors() {
        let result: Result<(), AppError> = Err(AppError::BadRequest("All fields are required".into()));
        match result.on_failure("Error registering user") {
            Err(AppError::BadRequest(message)) => assert_eq!(message, "All fields are required"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
