//! Question-routing and context-assembly pipeline.
//!
//! Public API: [`answer_question`]. It classifies the question's intent,
//! optionally synthesizes a canned analysis plan, assembles the
//! `[system, user]` prompt pair, performs the single upstream
//! chat-completion call, and derives follow-up suggestions for the UI.

pub mod intent;
pub mod prompt;
pub mod scenario;
pub mod suggest;

mod api_types;
mod error;

pub use api_types::QaAnswer;
pub use error::AskPipelineError;
pub use suggest::{Suggestion, SuggestionAction};

use llm_service::ChatCompletion;
use tracing::{debug, info};

/// Answers a question about a web page.
///
/// Everything except the upstream call is synchronous work over small
/// strings; each invocation owns all of its state, so concurrent requests
/// share nothing.
///
/// # Errors
/// Propagates gateway failures. The local stages never fail.
pub async fn answer_question(
    llm: &dyn ChatCompletion,
    question: &str,
    page_context: Option<&str>,
) -> Result<QaAnswer, AskPipelineError> {
    // 1) Which page-data category is the question about?
    let intent = intent::classify(question);
    debug!(?intent, description = intent.description(), "intent classified");

    // 2) Canned analysis plan, when the question calls for one.
    let plan = if scenario::wants_reasoning(question, intent) {
        scenario::synthesize(question)
    } else {
        None
    };
    if plan.is_some() {
        debug!("analysis plan attached");
    }

    // 3) Fixed [system, user] prompt pair.
    let messages = prompt::build_messages(question, page_context, plan);

    // 4) Single upstream attempt; no retries.
    let answer = llm.complete(&messages).await?;
    info!(answer_len = answer.len(), "answer generated");

    // 5) Follow-up actions for the UI.
    let suggestions = suggest::generate(question, intent);

    Ok(QaAnswer {
        answer,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use llm_service::{ChatMessage, LlmServiceError, Role};
    use std::sync::Mutex;

    /// Double that records the outbound messages and returns a fixed
    /// answer.
    struct Recording {
        seen: Mutex<Vec<ChatMessage>>,
        answer: &'static str,
    }

    impl Recording {
        fn new(answer: &'static str) -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
                answer,
            }
        }
    }

    #[async_trait]
    impl ChatCompletion for Recording {
        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmServiceError> {
            *self.seen.lock().unwrap() = messages.to_vec();
            Ok(self.answer.to_string())
        }
    }

    /// Double that always fails with a rate-limit error.
    struct Failing;

    #[async_trait]
    impl ChatCompletion for Failing {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, LlmServiceError> {
            Err(LlmServiceError::RateLimited {
                snippet: "quota exhausted".into(),
            })
        }
    }

    #[tokio::test]
    async fn relays_the_answer_and_derives_suggestions() {
        let llm = Recording::new("answer text");

        let qa = answer_question(&llm, "why is my page slow", None)
            .await
            .unwrap();

        assert_eq!(qa.answer, "answer text");
        assert!(qa.suggestions.iter().any(|s| s.id == "analyze-more"));

        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].role, Role::System);
        // "why" triggers the bottleneck plan for this performance question.
        assert!(seen[1].content.contains("[Reasoning process]"));
    }

    #[tokio::test]
    async fn page_context_reaches_the_prompt() {
        let llm = Recording::new("ok");

        answer_question(&llm, "check the html structure", Some("<main> has 120 children"))
            .await
            .unwrap();

        let seen = llm.seen.lock().unwrap();
        assert!(seen[1].content.contains("[Page information]"));
        assert!(seen[1].content.contains("<main> has 120 children"));
    }

    #[tokio::test]
    async fn gateway_errors_propagate() {
        let err = answer_question(&Failing, "why is my page slow", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AskPipelineError::Llm(LlmServiceError::RateLimited { .. })
        ));
    }
}
