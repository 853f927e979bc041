use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use common::types::Envelope;

/// API failure mapped onto the JSON envelope.
///
/// Storage internals are logged but never leave the process; the response
/// body carries only a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("validation failed")]
    Validation(serde_json::Value),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<service::errors::ServiceError> for ApiError {
    fn from(e: service::errors::ServiceError) -> Self {
        use service::errors::ServiceError;
        match e {
            ServiceError::Validation(msg) => ApiError::BadRequest(msg),
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            ServiceError::Db(msg) => ApiError::Storage(msg),
            ServiceError::Model(me) => match me {
                models::errors::ModelError::Validation(msg) => ApiError::BadRequest(msg),
                models::errors::ModelError::Db(msg) => ApiError::Storage(msg),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, Envelope::fail(json!("Unauthorized"))),
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, Envelope::fail(json!("Invalid credentials")))
            }
            ApiError::Validation(fields) => (StatusCode::BAD_REQUEST, Envelope::fail(fields)),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, Envelope::fail(json!(msg))),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, Envelope::fail(json!(msg))),
            ApiError::Storage(msg) => {
                error!(error = %msg, "storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, Envelope::fail(json!("Internal server error")))
            }
        };
        (status, Json(envelope)).into_response()
    }
}
