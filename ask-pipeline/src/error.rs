//! Typed error for the ask-pipeline crate.

use thiserror::Error;

/// Pipeline failures. Classification, plan synthesis, prompt assembly, and
/// suggestion generation are total functions, so the only failure source is
/// the upstream gateway.
#[derive(Debug, Error)]
pub enum AskPipelineError {
    /// Errors from the chat-completion gateway.
    #[error(transparent)]
    Llm(#[from] llm_service::LlmServiceError),
}
