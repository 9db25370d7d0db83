//! Unified error handling for `llm-service`.
//!
//! This module exposes the single error type [`LlmServiceError`] for the
//! whole crate, plus the pure status-mapping helper [`upstream_error`] so the
//! HTTP-status contract stays testable without a network.

use reqwest::StatusCode;
use thiserror::Error;

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, LlmServiceError>;

/// Errors produced by the chat-completion gateway.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmServiceError {
    /// The upstream credential is not configured.
    #[error("SILICONFLOW_API_KEY is not configured")]
    MissingApiKey,

    /// Upstream rejected the credential (HTTP 401).
    #[error("upstream rejected the API key, check SILICONFLOW_API_KEY: {snippet}")]
    InvalidApiKey {
        /// Short snippet of the upstream response body.
        snippet: String,
    },

    /// Upstream rate limit hit or quota exhausted (HTTP 429).
    #[error("upstream rate limit hit or quota exhausted, retry later: {snippet}")]
    RateLimited {
        /// Short snippet of the upstream response body.
        snippet: String,
    },

    /// Upstream internal failure (HTTP 500).
    #[error("upstream server error, retry later: {snippet}")]
    UpstreamServer {
        /// Short snippet of the upstream response body.
        snippet: String,
    },

    /// Any other non-success HTTP status from upstream.
    #[error("HTTP {status} from {url}: {snippet}")]
    UpstreamStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the upstream response body.
        snippet: String,
    },

    /// Transport-level failure (connect, TLS, timeout), propagated as-is.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Maps a non-success upstream status to the matching domain error.
///
/// 401, 429 and 500 have dedicated variants with actionable messages; every
/// other status falls through to [`LlmServiceError::UpstreamStatus`] carrying
/// the status, URL and a body snippet.
pub fn upstream_error(status: StatusCode, url: &str, body: &str) -> LlmServiceError {
    let snippet = make_snippet(body);
    match status {
        StatusCode::UNAUTHORIZED => LlmServiceError::InvalidApiKey { snippet },
        StatusCode::TOO_MANY_REQUESTS => LlmServiceError::RateLimited { snippet },
        StatusCode::INTERNAL_SERVER_ERROR => LlmServiceError::UpstreamServer { snippet },
        _ => LlmServiceError::UpstreamStatus {
            status,
            url: url.to_string(),
            snippet,
        },
    }
}

/// Short, single-line body snippet for logs and error messages.
pub fn make_snippet(body: &str) -> String {
    const MAX: usize = 240;

    let flat = body.trim().replace(['\r', '\n'], " ");
    if flat.len() <= MAX {
        return flat;
    }
    let mut end = MAX;
    while end > 0 && !flat.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &flat[..end])
}
