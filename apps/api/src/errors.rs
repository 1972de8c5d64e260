use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so it can serve as an extractor rejection or a handler error.
///
/// An empty match list is never an error; catalog failures always are.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog not readable at {path}: {source}")]
    MissingCatalog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog at {path} is malformed: {message}")]
    MalformedCatalog { path: PathBuf, message: String },

    /// Submission body that could not be read as an answer map.
    #[error("Invalid submission: {message}")]
    InvalidSubmission { status: StatusCode, message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingCatalog { path, source } => {
                tracing::error!("Catalog missing at {}: {source}", path.display());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MISSING_CATALOG",
                    "The program catalog could not be read".to_string(),
                )
            }
            AppError::MalformedCatalog { path, message } => {
                tracing::error!("Catalog malformed at {}: {message}", path.display());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MALFORMED_CATALOG",
                    "The program catalog is malformed".to_string(),
                )
            }
            AppError::InvalidSubmission { status, message } => {
                tracing::debug!("Rejected submission ({status}): {message}");
                (*status, "INVALID_SUBMISSION", message.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
