use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::error;

use crate::domain::DomainError;
use shared::{ErrorResponse, ValidationErrorResponse};

/// Every failure a handler can report, with its HTTP rendering
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A specific entity id does not exist
    #[error("{0} not found")]
    NotFound(&'static str),
    /// No route matches the request
    #[error("Not found")]
    RouteNotFound,
    /// The route exists but not for this HTTP method
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Bad request: {}", .0.join("; "))]
    BadRequest(Vec<String>),
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(vec![message.into()])
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(entity) => ApiError::NotFound(entity),
            DomainError::Validation(e) => ApiError::bad_request(e.to_string()),
            DomainError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(_) | ApiError::RouteNotFound => {
                let body = ErrorResponse {
                    error: self.to_string(),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ApiError::MethodNotAllowed => {
                let body = ErrorResponse {
                    error: self.to_string(),
                };
                (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
            }
            ApiError::BadRequest(errors) => {
                (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors })).into_response()
            }
            ApiError::Internal(e) => {
                error!("Internal server error: {:#}", e);
                internal_error_response()
            }
        }
    }
}

/// The generic 500 body; carries no detail about the failure
pub fn internal_error_response() -> Response {
    let body = ErrorResponse {
        error: "Internal server error".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}
