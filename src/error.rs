//! Application error type and its HTTP representation.
//!
//! | Variant          | Status | Body                                                      |
//! |------------------|--------|-----------------------------------------------------------|
//! | `Unauthorized`   | 401    | `{"message": "Unauthenticated."}`                         |
//! | `Validation`     | 422    | `{"message": "The given data was invalid.", "errors": {}}` |
//! | `DeleteFailed`   | 422    | `{"message": "Something went wrong!"}`                    |
//! | `NotFound`       | 404    | `{"message": "Record not found."}`                        |
//! | `BadRequest`     | 400    | `{"message": "<reason>"}`                                 |
//! | `Database`/`Internal` | 500 | `{"message": "Server Error"}`                           |

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::application::validation::FieldErrors;
use crate::utils::db_error;

pub const UNAUTHENTICATED_MESSAGE: &str = "Unauthenticated.";
pub const INVALID_DATA_MESSAGE: &str = "The given data was invalid.";
pub const DELETE_FAILED_MESSAGE: &str = "Something went wrong!";
pub const NOT_FOUND_MESSAGE: &str = "Record not found.";
pub const SERVER_ERROR_MESSAGE: &str = "Server Error";

#[derive(Serialize)]
struct MessageBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    message: &'a str,
    errors: &'a FieldErrors,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("request is not authenticated")]
    Unauthorized,

    #[error("validation failed: {0:?}")]
    Validation(FieldErrors),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("record not found")]
    NotFound,

    #[error("storage rejected the delete")]
    DeleteFailed,

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the field errors carried by a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Unique and foreign-key violations on known constraints become field errors,
/// so a lost check-then-write race answers exactly like the validation fast path.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match db_error::constraint_field_errors(&e) {
            Some(errors) => Self::Validation(errors),
            None => Self::Database(e),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(FieldErrors::from(errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => {
                let mut response = (
                    StatusCode::UNAUTHORIZED,
                    Json(MessageBody {
                        message: UNAUTHENTICATED_MESSAGE,
                    }),
                )
                    .into_response();
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
                response
            }
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationBody {
                    message: INVALID_DATA_MESSAGE,
                    errors: &errors,
                }),
            )
                .into_response(),
            AppError::DeleteFailed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(MessageBody {
                    message: DELETE_FAILED_MESSAGE,
                }),
            )
                .into_response(),
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageBody {
                    message: NOT_FOUND_MESSAGE,
                }),
            )
                .into_response(),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(MessageBody { message: &message }),
            )
                .into_response(),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                server_error()
            }
            AppError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                server_error()
            }
        }
    }
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageBody {
            message: SERVER_ERROR_MESSAGE,
        }),
    )
        .into_response()
}
