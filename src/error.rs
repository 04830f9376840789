//! Request-level error type.
//!
//! Per-location failures never surface here; they are reported inside the
//! batch response. `AppError` covers everything that fails a whole request.

use crate::{models::ErrorResponse, store::StoreError};
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("At least one location is required.")]
    NoLocations,

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),

    #[error("Server configuration error ({0}).")]
    Configuration(String),

    #[error("Failed to access weather history: {0}")]
    Storage(#[from] StoreError),

    #[error("Background task failed: {0}")]
    Blocking(String),
}

impl AppError {
    /// Message returned to clients; internal details stay in the logs
    pub fn user_message(&self) -> String {
        match self {
            AppError::Storage(_) => "Failed to access weather history.".to_string(),
            AppError::Blocking(_) => "An internal error occurred.".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::Blocking(err.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NoLocations | AppError::InvalidRequestBody(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Storage(_) | AppError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Rejected request");
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.user_message(),
        })
    }
}
