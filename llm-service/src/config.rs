//! Upstream configuration for the chat-completion gateway.

/// Environment variable holding the upstream bearer credential.
pub const API_KEY_VAR: &str = "SILICONFLOW_API_KEY";

/// Configuration for one chat-completion upstream.
///
/// # Fields
///
/// - `model`: model identifier sent with every request.
/// - `endpoint`: full chat-completions URL.
/// - `api_key`: optional credential override; when `None`, the key is
///   resolved from [`API_KEY_VAR`] at call time.
/// - `max_tokens`: generation cap sent with every request.
/// - `temperature`: sampling temperature sent with every request.
/// - `timeout_secs`: transport timeout for the whole call.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier string.
    pub model: String,

    /// Chat-completions endpoint URL.
    pub endpoint: String,

    /// Optional credential override (tests, multi-tenant setups).
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: u32,

    /// Sampling temperature.
    pub temperature: f32,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// The fixed SiliconFlow (DeepSeek) upstream used by this backend.
    pub fn siliconflow() -> Self {
        Self {
            model: "deepseek-ai/DeepSeek-V3".to_string(),
            endpoint: "https://api.siliconflow.cn/v1/chat/completions".to_string(),
            api_key: None,
            max_tokens: 1000,
            temperature: 0.7,
            timeout_secs: 30,
        }
    }
}
