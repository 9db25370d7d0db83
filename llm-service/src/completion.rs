//! The chat-completion capability and its message types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error_handler::LlmServiceError;

/// Message role in an OpenAI-style chat exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of the outbound prompt sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    /// Builds a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Builds a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Abstract chat-completion capability.
///
/// The pipeline depends on this trait rather than on a concrete client, so
/// the HTTP-backed [`crate::ChatService`] and in-process test doubles are
/// interchangeable behind `Arc<dyn ChatCompletion>`.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Sends `messages` upstream and returns the assistant's answer text.
    ///
    /// # Errors
    /// Returns [`LlmServiceError`] when the credential is missing, the
    /// upstream rejects the call, or transport fails.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmServiceError>;
}
