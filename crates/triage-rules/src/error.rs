use crate::config::ConfigError;
use crate::knowledge::{DocumentError, LookupError};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Knowledge(DocumentError),
    Lookup(LookupError),
    EmptySelection,
    ReloadUnavailable,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Knowledge(err) => write!(f, "knowledge error: {}", err),
            AppError::Lookup(err) => write!(f, "lookup error: {}", err),
            AppError::EmptySelection => write!(f, "select at least one symptom"),
            AppError::ReloadUnavailable => {
                write!(f, "no knowledge document configured; set APP_KNOWLEDGE_PATH")
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Knowledge(err) => Some(err),
            AppError::Lookup(err) => Some(err),
            AppError::EmptySelection | AppError::ReloadUnavailable => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Knowledge(_) => StatusCode::BAD_REQUEST,
            AppError::Lookup(_) => StatusCode::NOT_FOUND,
            AppError::EmptySelection => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ReloadUnavailable => StatusCode::CONFLICT,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DocumentError> for AppError {
    fn from(value: DocumentError) -> Self {
        Self::Knowledge(value)
    }
}

impl From<LookupError> for AppError {
    fn from(value: LookupError) -> Self {
        Self::Lookup(value)
    }
}
