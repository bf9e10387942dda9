use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Stable machine-readable kind surfaced in every error response.
    fn kind(&self) -> &'static str {
        match self {
            AppError::Database(ref err) => match err {
                DatabaseError::NotFound => "NOT_FOUND",
                DatabaseError::Duplicate => "CONFLICT",
                _ => "INTERNAL",
            },
            AppError::Authentication(_) => "AUTHENTICATION",
            AppError::Authorization(_) => "AUTHORIZATION",
            AppError::Validation(_) => "VALIDATION",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::InternalServerError(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Database(ref err) => match err {
                DatabaseError::NotFound => (StatusCode::NOT_FOUND, "Recurso no encontrado"),
                DatabaseError::Duplicate => (StatusCode::CONFLICT, "El recurso ya existe"),
                _ => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor",
                ),
            },
            AppError::Authentication(_) => (StatusCode::UNAUTHORIZED, "Usuario no autenticado"),
            AppError::Authorization(_) => (StatusCode::FORBIDDEN, "Acceso denegado"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "Datos inválidos"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "Recurso no encontrado"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "Conflicto de recursos"),
            AppError::InternalServerError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno del servidor",
            ),
        };

        let body = Json(json!({
            "success": false,
            "error": {
                "kind": self.kind(),
                "message": error_message,
                "details": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
