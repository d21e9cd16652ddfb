use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type FeedbackResult<T> = Result<T, FeedbackError>;

impl From<FeedbackError> for AppError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::Validation(msg) => AppError::BadRequest(msg),
            FeedbackError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for FeedbackError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for FeedbackError {
    fn from(err: mongodb::error::Error) -> Self {
        FeedbackError::Database(err.to_string())
    }
}
