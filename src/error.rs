//! Stable error codes and their HTTP responses.

use crate::domain::Violation;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rusqlite::ErrorCode;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Db(String),

    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    #[error("{0}")]
    NotFound(String),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Db(_) => "DB_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn hero_not_found() -> Self {
        Self::NotFound("Hero not found".into())
    }

    pub fn power_not_found() -> Self {
        Self::NotFound("Power not found".into())
    }
}

impl From<Violation> for AppError {
    fn from(v: Violation) -> Self {
        AppError::Validation(vec![v])
    }
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        match e.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => {
                AppError::Validation(vec![Violation::Constraint(e.to_string())])
            }
            _ => AppError::Db(e.to_string()),
        }
    }
}

/// Clients only ever see the resource message or the generic error list;
/// violation and database detail stay in the log.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            Self::NotFound(msg) => json!({ "error": msg }),
            Self::Validation(_) => json!({ "errors": ["validation errors"] }),
            Self::Db(msg) => {
                log::error!("Database error: {}", msg);
                json!({ "error": "Internal server error" })
            }
        };
        (self.status(), Json(body)).into_response()
    }
}
