//! HTTP error mapping.
//!
//! Every failing handler returns an [`AppError`], rendered as
//! `{ "error": <message>, "code": <CODE> }` with a matching status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::error::CoreError;
use serde_json::json;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for `foreign_key_violation`.
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Application-level error type for HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure the client cannot act on. The message is logged, never sent.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_MESSAGE.to_string(),
    )
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(err) => {
                let (status, code) = match err {
                    CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                    CoreError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
                    CoreError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
                    CoreError::Forbidden(_) => (StatusCode::FORBIDDEN, "FORBIDDEN"),
                };
                let message = match err {
                    CoreError::NotFound { .. } => err.to_string(),
                    CoreError::Validation(msg)
                    | CoreError::Unauthorized(msg)
                    | CoreError::Forbidden(msg) => msg.clone(),
                };
                (status, code, message)
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let body = json!({
            "error": message,
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Map a sqlx error onto a status, code and client-safe message.
///
/// A `uq_*` unique violation is a write that raced past the singleton lock
/// and hit a single-active index: 409. A foreign key violation means the
/// request named a parent that does not exist: 400.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let Some(db_err) = err.as_database_error() {
        let constraint = db_err.constraint().unwrap_or("unknown");
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) if constraint.starts_with("uq_") => {
                return (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
            Some(FOREIGN_KEY_VIOLATION) => {
                return (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Referenced row does not exist: {constraint}"),
                );
            }
            _ => {}
        }
    }

    tracing::error!(error = %err, "Database error");
    internal()
}
