//! HTTP error mapping.
//!
//! Responses are plain text: the operation result on success, the validation
//! message on bad input. Validation failures are the caller's problem and
//! come back as 400 with the exact parser message; everything unexpected is
//! logged server-side and answered with a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::logs::log_error;
use crate::error::MatrixError;

/// Fixed message when the multipart form has no `file` field.
pub const MISSING_FILE_MESSAGE: &str =
    "A csv file containing a matrix must be included in the request as form variable 'file'";

/// Generic body for internal failures. Detail stays in the server log.
/// The spelling of "occured" is part of the wire contract; clients match on
/// this exact string.
pub const INTERNAL_ERROR_MESSAGE: &str = "An error occured while processing your request";

/// Errors a request handler can produce.
#[derive(Debug)]
pub enum ApiError {
    /// The multipart form had no `file` field.
    MissingFile,
    /// The multipart payload itself could not be decoded.
    Multipart(String),
    /// The upload was not a valid CSV matrix.
    InvalidMatrix(MatrixError),
    /// Anything unexpected. Never detailed to the caller.
    Internal(String),
}

impl From<MatrixError> for ApiError {
    fn from(err: MatrixError) -> Self {
        if err.is_client_error() {
            ApiError::InvalidMatrix(err)
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingFile => {
                (StatusCode::BAD_REQUEST, MISSING_FILE_MESSAGE).into_response()
            }
            ApiError::Multipart(detail) => (
                StatusCode::BAD_REQUEST,
                format!("Multipart error: {detail}"),
            )
                .into_response(),
            ApiError::InvalidMatrix(err) => {
                (StatusCode::BAD_REQUEST, err.to_string()).into_response()
            }
            ApiError::Internal(detail) => {
                log_error(format!("internal error: {detail}"));
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE).into_response()
            }
        }
    }
}
