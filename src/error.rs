//! Error types for Bookshelf server

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Book operation during which an error was raised; selects the failure wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookAction {
    Create,
    Get,
    Update,
    Delete,
}

impl fmt::Display for BookAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self {
            BookAction::Create => "Failed to add book",
            BookAction::Get => "Failed to get book",
            BookAction::Update => "Failed to update book",
            BookAction::Delete => "Failed to delete book",
        };
        f.write_str(prefix)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}. Please provide the book name")]
    MissingName(BookAction),

    #[error("{0}. readPage cannot be greater than pageCount")]
    PageOverflow(BookAction),

    #[error("{}", not_found_message(.0))]
    NotFound(BookAction),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

fn not_found_message(action: &BookAction) -> String {
    match action {
        BookAction::Get => "Book not found".to_string(),
        other => format!("{}. Book id not found", other),
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Always `fail`
    pub status: String,
    pub message: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingName(_) | AppError::PageOverflow(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!("Request rejected: {}", self);
        let message = self.to_string();

        let body = Json(ErrorResponse {
            status: "fail".to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
