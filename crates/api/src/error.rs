use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookshelf_core::error::CoreError;

use crate::auth::jwt::AuthError;
use crate::response::ApiResponse;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookshelf_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A rejected bearer token.
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    /// Unknown username or wrong password. Both render identically.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A bad request: `message` is the envelope summary, `detail` the specifics.
    #[error("Bad request: {message}: {detail}")]
    BadRequest { message: String, detail: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn bad_request(message: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} not found"),
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::NotFoundByKey { entity, key } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} not found"),
                    format!("{entity} '{key}' not found"),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "Validation failed".to_string(),
                    msg.clone(),
                ),
                CoreError::InvalidReference { entity, id } => (
                    StatusCode::BAD_REQUEST,
                    format!("Invalid {} ID", entity.to_lowercase()),
                    format!("{entity} with id {id} does not exist"),
                ),
                CoreError::Unauthorized(msg) => (
                    StatusCode::UNAUTHORIZED,
                    "Unauthorized".to_string(),
                    msg.clone(),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        msg.clone(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Authentication ---
            AppError::Auth(err) => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized".to_string(),
                err.to_string(),
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid credentials".to_string(),
                "invalid username or password".to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest { message, detail } => {
                (StatusCode::BAD_REQUEST, message.clone(), detail.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    msg.clone(),
                )
            }
        };

        (status, Json(ApiResponse::error(message, error))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, envelope message, and detail.
///
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 carrying the driver's error text.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String, String) {
    if let sqlx::Error::Database(db_err) = err {
        // PostgreSQL unique constraint violation: error code 23505
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if constraint.starts_with("uq_") {
                return (
                    StatusCode::CONFLICT,
                    "Conflict".to_string(),
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database error".to_string(),
        err.to_string(),
    )
}
