//! HTTP API errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the dashboard API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid request body
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Record not found
    #[error("API not found")]
    NotFound,

    /// Duplicate (name, method, path) triple
    #[error("API already exists")]
    Conflict,

    /// Dashboard data file missing
    #[error("Dashboard data file not found")]
    DataFileMissing,

    /// Internal failure (I/O, malformed data file)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::DataFileMissing => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotInitialized(_) => ApiError::DataFileMissing,
            StoreError::DuplicateRecord => ApiError::Conflict,
            StoreError::RecordNotFound(_) => ApiError::NotFound,
            StoreError::InvalidRecord(msg) => ApiError::InvalidBody(msg),
            StoreError::Io(msg) | StoreError::InvalidDocument(msg) => ApiError::Internal(msg),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
