//! HTTP error type shared by both services.
//!
//! Every failure leaves the server as `{"detail": "<message>"}` with the
//! status code carried by the error.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::hospital::error::HospitalError;
use crate::library::error::LibraryError;

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Doctor not found")]
    pub detail: String,
}

/// HTTP-level error with status and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    /// Parameter missing or not coercible to its declared type.
    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<HospitalError> for ApiError {
    fn from(err: HospitalError) -> Self {
        match err {
            HospitalError::NotFound(_) => Self::not_found(err.to_string()),
            HospitalError::InvalidReference(_) => Self::bad_request(err.to_string()),
        }
    }
}

impl From<LibraryError> for ApiError {
    fn from(err: LibraryError) -> Self {
        match err {
            LibraryError::NotFound(_) => Self::not_found(err.to_string()),
        }
    }
}

/// Handler result alias
pub type ApiResult<T> = Result<Json<T>, ApiError>;
