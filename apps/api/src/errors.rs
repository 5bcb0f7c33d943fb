use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::ui::notice::Notice;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Raised only at startup; the server never starts without a credential.
    #[error("Required environment variable '{0}' is not set")]
    MissingCredential(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Error reading PDF: {0}")]
    PdfParse(String),

    #[error("Could not extract any text from the uploaded file.")]
    EmptyExtraction,

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The notice shown inline by the HTML flow. Every error ends the current
    /// interaction only; the page always offers a fresh upload.
    pub fn notice(&self) -> Notice {
        match self {
            AppError::EmptyExtraction => Notice::warning(self.to_string()),
            AppError::Template(_) | AppError::Internal(_) => {
                Notice::error("An internal server error occurred")
            }
            _ => Notice::error(self.to_string()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::PdfParse(_) | AppError::EmptyExtraction => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Inference(_) => StatusCode::BAD_GATEWAY,
            AppError::MissingCredential(_) | AppError::Template(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Emits the log line for this error. Server faults are errors; anything
    /// the user can fix by retrying with another file is a warning.
    pub fn log(&self) {
        match self {
            AppError::Inference(msg) => tracing::error!("Inference error: {msg}"),
            AppError::Template(e) => tracing::error!("Template error: {e}"),
            AppError::Internal(e) => tracing::error!("Internal error: {e:?}"),
            AppError::MissingCredential(key) => tracing::error!("Missing credential: {key}"),
            other => tracing::warn!("{other}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let (code, message) = match &self {
            AppError::MissingCredential(_) => (
                "MISSING_CREDENTIAL",
                "The service is not configured".to_string(),
            ),
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge(msg) => ("PAYLOAD_TOO_LARGE", msg.clone()),
            AppError::PdfParse(msg) => ("PDF_PARSE_ERROR", msg.clone()),
            AppError::EmptyExtraction => ("EMPTY_EXTRACTION", self.to_string()),
            AppError::Inference(msg) => ("INFERENCE_ERROR", msg.clone()),
            AppError::Template(_) => (
                "TEMPLATE_ERROR",
                "A rendering error occurred".to_string(),
            ),
            AppError::Internal(_) => (
                "INTERNAL_ERROR",
                "An internal server error occurred".to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (self.status(), body).into_response()
    }
}
