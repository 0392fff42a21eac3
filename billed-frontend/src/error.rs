use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure of a remote store call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Non-success HTTP status from the store.
    #[error("Erreur {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejection carrying the store's own message, for stores that answer
    /// with a reason rather than a status. `HttpRemoteStore` maps by status
    /// and never produces it.
    #[error("{0}")]
    Rejected(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => StoreError::Status(status.as_u16()),
            None if err.is_decode() => StoreError::InvalidResponse(err.to_string()),
            None => StoreError::Transport(err.to_string()),
        }
    }
}

/// A single field that could not be formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid date '{raw}'")]
    DateParse { raw: String },

    #[error("Unknown status code '{code}'")]
    UnknownStatus { code: String },
}

/// Rejection of a file selection before anything is uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("No file selected")]
    MissingFile,

    #[error("Unsupported file '{file_name}', expected one of: {allowed}")]
    UnsupportedFile { file_name: String, allowed: String },
}

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Submit(#[from] SubmitError),

    #[error("Bad Gateway: {0}")]
    BadGateway(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let status = match &self {
            ApiError::BadRequest(_) | ApiError::Submit(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        };

        let error = match self {
            ApiError::BadGateway(err) => err.to_string(),
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}
