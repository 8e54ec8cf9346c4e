// src/errors.rs
use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Błąd SQLx: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Nie znaleziono zasobu: {0}")]
    NotFound(String),

    #[error("Błędy walidacji")]
    ValidationError(#[from] ValidationErrors),

    #[error("Nieprawidłowe żądanie: {0}")]
    BadRequest(String),
}

/// Treść odpowiedzi błędu: `{ statusCode, message, errors? }`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub status_code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ApiErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiErrorResponse {
            status_code: status.as_u16(),
            message: message.into(),
            errors: Vec::new(),
        }
    }
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let msg = error.message.as_ref().map_or_else(
                || format!("Pole '{}' jest nieprawidłowe", field),
                |m| format!("Pole '{}': {}", field, m),
            );
            messages.push(msg);
        }
    }
    messages.sort();
    messages
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match self {
            AppError::SqlxError(sqlx_error) => {
                tracing::error!("Błąd SQLx: {:?}", sqlx_error);
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Wystąpił wewnętrzny błąd serwera (baza danych)",
                )
            }
            AppError::NotFound(message) => ApiErrorResponse::new(StatusCode::NOT_FOUND, message),
            AppError::ValidationError(errors) => ApiErrorResponse {
                errors: validation_messages(&errors),
                ..ApiErrorResponse::new(StatusCode::BAD_REQUEST, "Nieprawidłowe parametry zapytania")
            },
            AppError::BadRequest(message) => ApiErrorResponse {
                errors: vec![message],
                ..ApiErrorResponse::new(StatusCode::BAD_REQUEST, "Nieprawidłowe parametry zapytania")
            },
        };

        let status =
            StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Nie można odczytać parametrów zapytania: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Nieprawidłowy parametr ścieżki: {}", rejection.body_text());
        AppError::BadRequest(rejection.body_text())
    }
}
