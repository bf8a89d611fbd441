//! Axum-specific error types and mappings.
//!
//! Maps `CoreError` to HTTP status codes and a JSON body of the form
//! `{"error": "...", "status": 404}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use predictor_core::{CoreError, DemographicsError, RepositoryError};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Input is well-formed but cannot be processed, e.g. a name with no
    /// demographic guess.
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The demographics service failed.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Internal server error. The message is safe to show to clients.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// HTTP status code, repeated from the response line.
    pub status: u16,
}

impl HttpError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Unprocessable(msg)
            | Self::BadGateway(msg)
            | Self::Internal(msg) => msg,
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Demographics(demo_err) => demo_err.into(),
            CoreError::Page(page_err) => Self::BadRequest(page_err.to_string()),
            CoreError::Validation(msg) => Self::BadRequest(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound(format!("Person {id} not found")),
            storage @ RepositoryError::Storage { .. } => {
                error!(error = %storage, "Storage failure");
                Self::Internal("internal error".to_string())
            }
        }
    }
}

impl From<DemographicsError> for HttpError {
    fn from(err: DemographicsError) -> Self {
        match err {
            not_found @ DemographicsError::NotFound { .. } => {
                Self::Unprocessable(not_found.to_string())
            }
            DemographicsError::Upstream(msg) => {
                warn!(error = %msg, "Demographics lookup failed");
                Self::BadGateway("demographics service unavailable".to_string())
            }
        }
    }
}
