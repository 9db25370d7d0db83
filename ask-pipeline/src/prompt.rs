//! Prompt builder: fixed persona system message + composed user message.

use llm_service::ChatMessage;

/// Persona instruction sent as the system message on every request.
///
/// Keep this short: it consistently improves steering without wasting
/// tokens.
pub const SYSTEM_PROMPT: &str = "\
You are a front-end development assistant who helps developers analyse web page problems and improve their code.

Your responsibilities:
1. Analyse the front-end question being asked
2. Give concrete advice based on the supplied page information (DOM, CSS, network requests)
3. Answer in concise, friendly language
4. Provide actionable optimization suggestions

When the question relates to front-end development, base the analysis on the supplied page information first.";

/// Section label for the page facts gathered by the extension.
const PAGE_INFO_LABEL: &str = "[Page information]";

/// Section label for the canned analysis plan.
const REASONING_LABEL: &str = "[Reasoning process]";

/// Builds the outbound message sequence: always exactly `[system, user]`.
///
/// The user body starts with the question verbatim. A page-information
/// block is appended when `page_context` is non-empty after trimming, then
/// a reasoning block when `scenario_context` is non-empty. Nothing is
/// truncated or escaped here: the extension bounds the page context before
/// sending it.
pub fn build_messages(
    question: &str,
    page_context: Option<&str>,
    scenario_context: Option<&str>,
) -> Vec<ChatMessage> {
    let mut user = question.to_string();

    if let Some(ctx) = page_context {
        if !ctx.trim().is_empty() {
            user.push_str("\n\n");
            user.push_str(PAGE_INFO_LABEL);
            user.push('\n');
            user.push_str(ctx);
        }
    }

    if let Some(plan) = scenario_context {
        if !plan.trim().is_empty() {
            user.push_str("\n\n");
            user.push_str(REASONING_LABEL);
            user.push('\n');
            user.push_str(plan);
        }
    }

    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(user)]
}
