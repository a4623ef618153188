//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DatabaseError(msg) => {
                eprintln!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": msg })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::ValidationError(msg) => {
                eprintln!("Validation error: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                eprintln!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            // Código OVERLAP: la UI distingue "fechas no disponibles"
            // de un error de validación genérico
            AppError::Conflict(msg) => {
                eprintln!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("OVERLAP".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_conflict_maps_to_409_with_overlap_code() {
        let (status, body) =
            response_parts(AppError::Conflict("Selected period overlaps".to_string())).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "OVERLAP");
        assert_eq!(body["error"], "Conflict");
        assert_eq!(body["message"], "Selected period overlaps");
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let (status, body) =
            response_parts(AppError::ValidationError("end_date is required".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let (status, body) =
            response_parts(AppError::NotFound("Car not found".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_database_error_maps_to_500() {
        let (status, body) =
            response_parts(AppError::DatabaseError("connection refused".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DB_ERROR");
    }
}
