//! Chat-completion gateway for the page-assist backend.
//!
//! One fixed upstream (SiliconFlow's OpenAI-style chat API), one
//! non-streaming call per request, no retries. The [`ChatCompletion`] trait
//! is the seam the pipeline depends on; [`ChatService`] is the HTTP-backed
//! implementation, and tests substitute their own double.

pub mod chat_service;
pub mod completion;
pub mod config;
pub mod error_handler;

pub use chat_service::ChatService;
pub use completion::{ChatCompletion, ChatMessage, Role};
pub use config::LlmConfig;
pub use error_handler::LlmServiceError;
