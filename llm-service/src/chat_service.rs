//! SiliconFlow chat-completion service.
//!
//! Minimal, non-streaming client around the OpenAI-style REST API:
//! - `POST {endpoint}` — chat completion
//!
//! Exactly one upstream attempt is made per call; callers that want retries
//! layer them on top. Errors are normalized via the unified types in
//! `error_handler`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    completion::{ChatCompletion, ChatMessage},
    config::{API_KEY_VAR, LlmConfig},
    error_handler::{LlmServiceError, make_snippet, upstream_error},
};

/// Thin client for the SiliconFlow chat-completions API.
///
/// Keeps a preconfigured `reqwest::Client` (timeout + JSON headers). The
/// bearer credential is not baked into the client: it is resolved on every
/// call, so a missing key fails before any network I/O and a key added to
/// the environment after startup is picked up.
#[derive(Debug)]
pub struct ChatService {
    client: reqwest::Client,
    cfg: LlmConfig,
}

impl ChatService {
    /// Creates a new [`ChatService`] from the given config.
    ///
    /// # Errors
    /// - [`LlmServiceError::Transport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmConfig) -> Result<Self, LlmServiceError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .default_headers(headers)
            .build()?;

        info!(
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout_secs,
            "ChatService initialized"
        );

        Ok(Self { client, cfg })
    }

    /// Resolves the bearer credential: config override first, then the
    /// process environment.
    fn resolve_api_key(&self) -> Result<String, LlmServiceError> {
        if let Some(key) = self.cfg.api_key.as_deref() {
            if !key.trim().is_empty() {
                return Ok(key.to_string());
            }
        }
        match std::env::var(API_KEY_VAR) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(LlmServiceError::MissingApiKey),
        }
    }
}

#[async_trait]
impl ChatCompletion for ChatService {
    /// Performs a single non-streaming chat completion.
    ///
    /// # Errors
    /// - [`LlmServiceError::MissingApiKey`] before any I/O when no credential
    ///   is configured
    /// - [`LlmServiceError::InvalidApiKey`] on HTTP 401
    /// - [`LlmServiceError::RateLimited`] on HTTP 429
    /// - [`LlmServiceError::UpstreamServer`] on HTTP 500
    /// - [`LlmServiceError::UpstreamStatus`] on any other non-2xx status
    /// - [`LlmServiceError::Transport`] for client/network/timeout failures
    /// - [`LlmServiceError::Decode`] if the JSON cannot be parsed or carries
    ///   no choices
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmServiceError> {
        let api_key = self.resolve_api_key()?;

        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, messages);

        debug!(
            model = %self.cfg.model,
            message_count = messages.len(),
            "POST {}", self.cfg.endpoint
        );

        let resp = self
            .client
            .post(&self.cfg.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();

            error!(
                %status,
                url = %self.cfg.endpoint,
                snippet = %make_snippet(&text),
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(upstream_error(status, &self.cfg.endpoint, &text));
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode chat completion response"
                );
                return Err(LlmServiceError::Decode(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                )));
            }
        };

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or_else(|| LlmServiceError::Decode("empty `choices` in response".into()))?;

        info!(
            model = %self.cfg.model,
            answer_len = content.len(),
            latency_ms = started.elapsed().as_millis(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for the chat-completions endpoint (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_cfg(cfg: &'a LlmConfig, messages: &'a [ChatMessage]) -> Self {
        Self {
            model: &cfg.model,
            messages,
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
        }
    }
}

/// Minimal response for the chat-completions endpoint.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    /// Serves one canned HTTP/1.1 reply per connection on a random local
    /// port and returns the base URL. Reads the full request first so the
    /// client is never cut off mid-write.
    async fn canned_reply_server(status_line: &'static str, body: &'static str) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut sock, _)) = listener.accept().await {
                read_request(&mut sock).await;
                let reply = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = sock.write_all(reply.as_bytes()).await;
                let _ = sock.shutdown().await;
            }
        });

        format!("http://{addr}")
    }

    /// Reads request headers plus a content-length body.
    async fn read_request(sock: &mut tokio::net::TcpStream) {
        let mut buf = Vec::new();
        let mut tmp = [0u8; 1024];
        loop {
            let n = match sock.read(&mut tmp).await {
                Ok(0) | Err(_) => return,
                Ok(n) => n,
            };
            buf.extend_from_slice(&tmp[..n]);

            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..pos]);
                let content_length = headers
                    .lines()
                    .filter_map(|l| l.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= pos + 4 + content_length {
                    return;
                }
            }
        }
    }

    fn service_for(endpoint: String) -> ChatService {
        let cfg = LlmConfig {
            endpoint,
            api_key: Some("test-key".into()),
            ..LlmConfig::siliconflow()
        };
        ChatService::new(cfg).unwrap()
    }

    fn question() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("You are terse."),
            ChatMessage::user("Why is this page slow?"),
        ]
    }

    #[tokio::test]
    async fn missing_key_fails_before_any_network_call() {
        if std::env::var(API_KEY_VAR).is_ok() {
            // Developer machine with a real credential; nothing to check.
            return;
        }

        // Discard port: a transport error here would mean the credential
        // check did not run first.
        let cfg = LlmConfig {
            endpoint: "http://127.0.0.1:9".into(),
            api_key: None,
            ..LlmConfig::siliconflow()
        };
        let svc = ChatService::new(cfg).unwrap();

        let err = svc.complete(&question()).await.unwrap_err();
        assert!(matches!(err, LlmServiceError::MissingApiKey));
    }

    #[tokio::test]
    async fn unauthorized_reply_maps_to_invalid_api_key() {
        let base = canned_reply_server("401 Unauthorized", r#"{"message":"invalid token"}"#).await;
        let svc = service_for(base);

        let err = svc.complete(&question()).await.unwrap_err();
        assert!(matches!(err, LlmServiceError::InvalidApiKey { .. }));
    }

    #[tokio::test]
    async fn rate_limit_reply_maps_to_rate_limited() {
        let base = canned_reply_server("429 Too Many Requests", r#"{"message":"slow down"}"#).await;
        let svc = service_for(base);

        let err = svc.complete(&question()).await.unwrap_err();
        assert!(matches!(err, LlmServiceError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn server_error_reply_maps_to_upstream_server() {
        let base = canned_reply_server("500 Internal Server Error", "{}").await;
        let svc = service_for(base);

        let err = svc.complete(&question()).await.unwrap_err();
        assert!(matches!(err, LlmServiceError::UpstreamServer { .. }));
    }

    #[tokio::test]
    async fn success_reply_returns_first_choice_content() {
        let base = canned_reply_server(
            "200 OK",
            r#"{"choices":[{"message":{"content":"answer text"}}]}"#,
        )
        .await;
        let svc = service_for(base);

        let answer = svc.complete(&question()).await.unwrap();
        assert_eq!(answer, "answer text");
    }

    #[tokio::test]
    async fn empty_choices_is_a_decode_error() {
        let base = canned_reply_server("200 OK", r#"{"choices":[]}"#).await;
        let svc = service_for(base);

        let err = svc.complete(&question()).await.unwrap_err();
        assert!(matches!(err, LlmServiceError::Decode(_)));
    }
}
