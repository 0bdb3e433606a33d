//! Unified application error type.
//! Every route and store operation returns AppError so the boundary
//! conversion to an HTTP response lives in one place.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::io;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// add-student called with an absent or empty name or roll number.
    #[error("Name and roll number required")]
    MissingField,

    /// save-attendance called with a missing date or no entries.
    #[error("Invalid data")]
    InvalidRequest,

    #[error("Roll number already exists")]
    DuplicateRollNumber,

    /// Entry status outside the configured set.
    #[error("Unknown attendance status: {0}")]
    UnknownStatus(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField
            | AppError::InvalidRequest
            | AppError::DuplicateRollNumber
            | AppError::UnknownStatus(_) => StatusCode::BAD_REQUEST,
            AppError::Db(_) | AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
