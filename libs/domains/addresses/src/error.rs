use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressError {
    #[error("Database error: {0}")]
    Database(String),
}

pub type AddressResult<T> = Result<T, AddressError>;

impl From<AddressError> for AppError {
    fn from(err: AddressError) -> Self {
        match err {
            AddressError::Database(msg) => AppError::internal(msg),
        }
    }
}

impl IntoResponse for AddressError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for AddressError {
    fn from(err: mongodb::error::Error) -> Self {
        AddressError::Database(err.to_string())
    }
}
