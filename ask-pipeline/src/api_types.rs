//! Public result types re-used by the HTTP layer.

use crate::suggest::Suggestion;

/// Final answer together with the follow-up actions derived for it.
#[derive(Clone, Debug)]
pub struct QaAnswer {
    /// Model answer (plain text).
    pub answer: String,
    /// Follow-up actions for the calling UI, in rule order.
    pub suggestions: Vec<Suggestion>,
}
