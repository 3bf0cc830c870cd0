//! Error types for the SunnyBooks server
//!
//! One taxonomy for the whole request cycle: validation and malformed
//! identifiers are client errors, unknown identifiers are not-found,
//! uniqueness violations are conflicts, illegal lifecycle transitions are
//! domain errors, everything else collapses to a generic server error.
//! Bodies carry a single human-readable `message` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Map a database error raised while writing caller-supplied references.
    ///
    /// Foreign-key violations mean the caller addressed a record that does
    /// not exist, which the API reports like a malformed reference (400)
    /// rather than a server failure. Unique violations become conflicts.
    pub fn from_write(e: sqlx::Error, references: &str, unique: &str) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            match db.code().as_deref() {
                // foreign_key_violation
                Some("23503") => {
                    return AppError::BadRequest(format!("Invalid {} id format", references))
                }
                // unique_violation
                Some("23505") => return AppError::Conflict(format!("{} already exists", unique)),
                _ => {}
            }
        }
        AppError::Database(e)
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            AppError::BusinessRule(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = Json(ErrorResponse { message });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
