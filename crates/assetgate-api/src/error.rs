//! Maps domain errors and gate rejections to HTTP responses.

use axum::Json;
use axum::http::header::{RETRY_AFTER, WWW_AUTHENTICATE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use assetgate_auth::Rejection;
use assetgate_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Application error at the HTTP boundary.
///
/// Wraps [`AppError`] so the crate can implement `IntoResponse` for it.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = match &err.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            ErrorKind::ServiceUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE")
            }
            ErrorKind::Internal
            | ErrorKind::Cache
            | ErrorKind::Configuration
            | ErrorKind::Serialization => {
                tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

/// A gate rejection ready to be sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateRejection {
    /// Why the gate denied the request.
    pub rejection: Rejection,
    /// Value for `Retry-After` on retryable rejections.
    pub retry_after_seconds: u64,
}

impl GateRejection {
    /// Wraps `rejection` with the retry hint for retryable outcomes.
    pub fn new(rejection: Rejection, retry_after_seconds: u64) -> Self {
        Self {
            rejection,
            retry_after_seconds,
        }
    }

    /// HTTP status for this rejection.
    pub fn status(&self) -> StatusCode {
        match self.rejection {
            Rejection::MissingCredential
            | Rejection::InvalidCredential
            | Rejection::SessionRevoked => StatusCode::UNAUTHORIZED,
            Rejection::Forbidden => StatusCode::FORBIDDEN,
            Rejection::RevocationCheckUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            error: self.rejection.code().to_string(),
            message: self.rejection.to_string(),
        };
        let mut response = (self.status(), Json(body)).into_response();
        let headers = response.headers_mut();

        match self.rejection {
            Rejection::MissingCredential => {
                headers.insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
            }
            Rejection::InvalidCredential | Rejection::SessionRevoked => {
                headers.insert(
                    WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer error=\"invalid_token\""),
                );
            }
            Rejection::RevocationCheckUnavailable => {
                headers.insert(RETRY_AFTER, HeaderValue::from(self.retry_after_seconds));
            }
            Rejection::Forbidden => {}
        }

        response
    }
}
