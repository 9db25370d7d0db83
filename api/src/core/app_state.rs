use std::sync::Arc;

use llm_service::{ChatCompletion, ChatService, LlmConfig};

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Upstream chat-completion capability. Behind a trait object so tests
    /// can substitute a double without any network.
    pub llm: Arc<dyn ChatCompletion>,
    /// Upstream label reported by the probe endpoint.
    pub llm_label: String,
}

impl AppState {
    /// Production state: the HTTP-backed SiliconFlow gateway with its fixed
    /// model parameters. The credential itself is resolved per call, so a
    /// missing key surfaces on the first question, not at boot.
    pub fn production() -> Result<Self, AppError> {
        let cfg = LlmConfig::siliconflow();
        let llm_label = format!("SiliconFlow ({})", cfg.model);
        let service = ChatService::new(cfg)?;

        Ok(Self {
            llm: Arc::new(service),
            llm_label,
        })
    }

    /// State with an arbitrary chat-completion capability (used by tests).
    pub fn with_llm(llm: Arc<dyn ChatCompletion>) -> Self {
        Self {
            llm,
            llm_label: "stub".to_string(),
        }
    }
}
