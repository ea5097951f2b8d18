//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Every error body is
//! `{ "message": ... }`; internal details are only logged.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::config::{INVALID_CREDENTIALS_MESSAGE, SERVER_ERROR_MESSAGE};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    /// Uniqueness or reference conflict
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error")]
    Database(#[from] DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::Validation(msg) => {
                msg.clone()
            }
            AppError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                SERVER_ERROR_MESSAGE.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                SERVER_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// True when the database rejected a write because a row is still referenced
    /// (or references a missing row).
    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            AppError::Database(e) if matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        )
    }

    /// True when the database rejected a write on a unique index.
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            AppError::Database(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(message.to_string()))
    }
}

/// Extension trait classifying constraint violations into conflicts.
pub trait ReferenceExt<T> {
    /// Turn a foreign-key violation into `Conflict(message)`.
    fn or_referenced(self, message: &str) -> AppResult<T>;

    /// Turn a unique-index violation into `Conflict(message)`.
    fn or_duplicate(self, message: &str) -> AppResult<T>;

    /// Turn a foreign-key violation on insert/update into `Validation(message)`:
    /// the payload pointed at a row that does not exist.
    fn or_unknown_reference(self, message: &str) -> AppResult<T>;
}

impl<T> ReferenceExt<T> for AppResult<T> {
    fn or_referenced(self, message: &str) -> AppResult<T> {
        self.map_err(|e| {
            if e.is_foreign_key_violation() {
                AppError::conflict(message)
            } else {
                e
            }
        })
    }

    fn or_duplicate(self, message: &str) -> AppResult<T> {
        self.map_err(|e| {
            if e.is_unique_violation() {
                AppError::conflict(message)
            } else {
                e
            }
        })
    }

    fn or_unknown_reference(self, message: &str) -> AppResult<T> {
        self.map_err(|e| {
            if e.is_foreign_key_violation() {
                AppError::validation(message)
            } else {
                e
            }
        })
    }
}

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
