//! POST /api/ask — answers a question about the current page.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::info;

use ask_pipeline::answer_question;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /api/ask
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/api/ask \
///   -H 'content-type: application/json' \
///   -d '{"question":"why is my page slow","context":"..."}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> AppResult<Json<AskResponse>> {
    let Json(body) = payload?;

    let question = match body.question.as_deref() {
        Some(q) if !q.trim().is_empty() => q,
        _ => {
            return Err(AppError::BadRequest(
                "question must be a non-empty string".into(),
            ));
        }
    };

    info!(question, "question received");

    let qa = answer_question(state.llm.as_ref(), question, body.context.as_deref()).await?;

    let context = if body.context.as_deref().is_some_and(|c| !c.trim().is_empty()) {
        "page context processed"
    } else {
        "no page context"
    };

    Ok(Json(AskResponse {
        answer: qa.answer,
        context: context.to_string(),
        suggestions: qa.suggestions,
    }))
}
