//! API error taxonomy and its mapping onto HTTP responses

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use notes_types::ErrorBody;
use thiserror::Error;

use crate::config::Environment;
use crate::notes::StoreError;

/// Every failure a notes endpoint can report.
///
/// `expose` decides whether diagnostic detail reaches the caller; it is
/// fixed when the error is built from the runtime environment.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("malformatted id: {message}")]
    MalformedId { message: String, expose: bool },

    #[error("note not found")]
    NotFound,

    #[error("internal server error: {message}")]
    Store { message: String, expose: bool },
}

impl ApiError {
    pub fn from_store(err: StoreError, env: Environment) -> Self {
        let expose = env.is_development();
        match err {
            StoreError::Validation(msg) => ApiError::Validation(msg),
            StoreError::MalformedId(_) => ApiError::MalformedId {
                message: err.to_string(),
                expose,
            },
            StoreError::Failure(ref e) => {
                log::error!("[STORE] Unexpected store failure: {:?}", e);
                ApiError::Store {
                    message: err.to_string(),
                    expose,
                }
            }
        }
    }

    /// Stable short reason string carried in the `error` field
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation failed",
            ApiError::MalformedId { .. } => "malformatted id",
            ApiError::NotFound => "note not found",
            ApiError::Store { .. } => "internal server error",
        }
    }

    fn body(&self) -> ErrorBody {
        let body = ErrorBody::new(self.reason());
        match self {
            ApiError::Validation(msg) => body.with_details(msg.clone()),
            ApiError::MalformedId { message, expose: true }
            | ApiError::Store { message, expose: true } => body.with_details(message.clone()),
            _ => body,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedId { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_failure() -> StoreError {
        StoreError::Failure(rusqlite::Error::InvalidQuery)
    }

    #[test]
    fn test_malformed_id_details_only_in_development() {
        let dev = ApiError::from_store(
            StoreError::MalformedId("xyz".to_string()),
            Environment::Development,
        );
        assert_eq!(dev.status_code(), StatusCode::BAD_REQUEST);
        assert!(dev.body().details.unwrap().contains("xyz"));

        let prod = ApiError::from_store(
            StoreError::MalformedId("xyz".to_string()),
            Environment::Production,
        );
        assert_eq!(prod.body(), ErrorBody::new("malformatted id"));
    }

    #[test]
    fn test_store_failure_is_500_and_hidden_in_production() {
        let prod = ApiError::from_store(store_failure(), Environment::Production);
        assert_eq!(prod.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(prod.body(), ErrorBody::new("internal server error"));

        let dev = ApiError::from_store(store_failure(), Environment::Development);
        assert!(dev.body().details.is_some());
    }

    #[test]
    fn test_validation_always_carries_details() {
        let err = ApiError::from_store(
            StoreError::Validation("content missing".to_string()),
            Environment::Production,
        );
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.body(),
            ErrorBody::new("validation failed").with_details("content missing")
        );
    }

    #[test]
    fn test_not_found_is_404() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.body(), ErrorBody::new("note not found"));
    }
}
