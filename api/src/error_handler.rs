//! Application error type and its HTTP mapping.

use ask_pipeline::AskPipelineError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use llm_service::LlmServiceError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request validation ---
    #[error("{0}")]
    BadRequest(String),

    // --- Pipeline / upstream ---
    #[error("failed to answer the question")]
    Pipeline(#[source] AskPipelineError),

    #[error("failed to initialize the LLM gateway")]
    Gateway(#[source] LlmServiceError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            AppError::Bind(_)
            | AppError::Server(_)
            | AppError::Pipeline(_)
            | AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Raw detail string surfaced to the caller next to the summary.
    /// Validation errors carry their whole message in `error` instead.
    fn details(&self) -> Option<String> {
        match self {
            AppError::BadRequest(_) => None,
            AppError::Pipeline(e) => Some(e.to_string()),
            AppError::Gateway(e) => Some(e.to_string()),
            AppError::Bind(e) | AppError::Server(e) => Some(e.to_string()),
        }
    }
}

/// Wire shape for error responses: validation failures carry `{error}`,
/// server failures `{error, details}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            details: self.details(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<AskPipelineError> for AppError {
    fn from(err: AskPipelineError) -> Self {
        AppError::Pipeline(err)
    }
}

impl From<LlmServiceError> for AppError {
    fn from(err: LlmServiceError) -> Self {
        AppError::Gateway(err)
    }
}

/// Convert Axum JSON rejections (malformed body, wrong field type) to the
/// documented 400 shape.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
