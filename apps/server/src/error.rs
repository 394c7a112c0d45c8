//! Error types for the cookbook server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Message returned for every 5xx so internals never leak to clients.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid cursor encoding: {0}")]
    InvalidEncoding(String),

    #[error("Malformed cursor: {0}")]
    MalformedCursor(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Ambiguous result: {0}")]
    Ambiguous(String),

    #[error("Operation timed out: {0}")]
    Timeout(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) | Error::InvalidEncoding(_) | Error::MalformedCursor(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Database(_)
            | Error::Migration(_)
            | Error::Ambiguous(_)
            | Error::Timeout(_)
            | Error::Internal(_)
            | Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error body: `{"Code": 400, "Message": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(rename = "Code")]
    pub code: u16,
    #[serde(rename = "Message")]
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Internal error");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
            self.to_string()
        };

        (status, Json(ErrorBody::new(status, message))).into_response()
    }
}
