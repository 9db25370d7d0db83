//! Machine-actionable follow-up suggestions.
//!
//! A fixed set of independent rules, each appending a suggestion when its
//! condition holds. Rules are not mutually exclusive; several can fire for
//! one request, and the output keeps declaration order. No deduplication or
//! ranking. The calling UI renders each suggestion as a button.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Value, json};

use crate::intent::Intent;

/// Operations the calling UI knows how to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SuggestionAction {
    GenerateSrcset,
    ViewOptimization,
    CheckAccessibility,
    AnalyzeMore,
}

/// One follow-up action attached to an answer.
#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub label: &'static str,
    pub action: SuggestionAction,
    pub params: Value,
}

static IMAGE_WORDS: LazyLock<Regex> = LazyLock::new(|| rule(r"图片|image|img|大小|size"));
static ACCESSIBILITY_WORDS: LazyLock<Regex> = LazyLock::new(|| rule(r"无障碍|accessibility|a11y"));
static OPTIMIZATION_WORDS: LazyLock<Regex> =
    LazyLock::new(|| rule(r"优化|提升|improve|optimize|slow|慢|性能|performance"));

fn rule(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("suggestion rule pattern must compile")
}

/// Derives follow-up suggestions from the question and its intent.
///
/// Every rule below is independent and appends; the result keeps the
/// declaration order of the rules.
pub fn generate(question: &str, intent: Intent) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    // Network and load performance: offer the detailed optimization view.
    if intent == Intent::Network {
        suggestions.push(Suggestion {
            id: "view-optimization",
            label: "View detailed optimization plan",
            action: SuggestionAction::ViewOptimization,
            params: json!({ "type": "network" }),
        });
    }

    // Images by intent or by wording: offer a responsive-image plan.
    if intent == Intent::Images || IMAGE_WORDS.is_match(question) {
        suggestions.push(Suggestion {
            id: "generate-srcset",
            label: "Generate responsive image plan",
            action: SuggestionAction::GenerateSrcset,
            params: json!({}),
        });
    }

    // Accessibility wording: offer the detailed audit.
    if ACCESSIBILITY_WORDS.is_match(question) {
        suggestions.push(Suggestion {
            id: "check-accessibility",
            label: "Run a detailed accessibility check",
            action: SuggestionAction::CheckAccessibility,
            params: json!({}),
        });
    }

    // Optimization or performance wording: offer a deeper analysis pass.
    if OPTIMIZATION_WORDS.is_match(question) {
        suggestions.push(Suggestion {
            id: "analyze-more",
            label: "Deeper performance analysis",
            action: SuggestionAction::AnalyzeMore,
            params: json!({ "type": "performance" }),
        });
    }

    suggestions
}
