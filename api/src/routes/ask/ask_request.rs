use ask_pipeline::Suggestion;
use serde::{Deserialize, Serialize};

/// Request payload for /api/ask.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Natural language question. Optional at the serde level so a missing
    /// field produces the documented 400 instead of a deserialization error.
    #[serde(default)]
    pub question: Option<String>,
    /// Optional page facts gathered by the extension; opaque text here.
    #[serde(default)]
    pub context: Option<String>,
}

/// Response payload for /api/ask.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// Final model answer (plain text).
    pub answer: String,
    /// Whether page context was folded into the prompt.
    pub context: String,
    /// Follow-up actions for the extension UI to render as buttons.
    pub suggestions: Vec<Suggestion>,
}
