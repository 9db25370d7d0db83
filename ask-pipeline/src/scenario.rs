//! Canned multi-step analysis plans.
//!
//! "Multi-step reasoning" here is template text that steers the upstream
//! model toward a structured answer; no inference happens locally. Three
//! scenario checks run in a fixed sequence against their own keyword sets.
//! Every match overwrites the previously selected plan, so when a question
//! matches several scenarios the LAST one in table order survives. That
//! tie-break is load-bearing: callers and tests pin it, so keep the
//! overwrite semantics instead of merging plans.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::intent::Intent;

/// Broad analysis scenarios, each with one canned plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    PerformanceBottleneck,
    Optimization,
    Accessibility,
}

const PERFORMANCE_BOTTLENECK_PLAN: &str = "\
[Analysis plan]
1. Inspect the network requests and find the resources with the longest load times
2. Check the DOM structure for blocking scripts
3. Combine both to decide whether the critical rendering path is blocked

Points the answer should cover:
- The most expensive resource types (JS/CSS/images)
- Whether synchronous scripts block page load
- Whether non-critical resources can be deferred or lazy-loaded
";

const OPTIMIZATION_PLAN: &str = "\
[Optimization plan]
1. Analyse asset size
   - Find the largest resource files
   - Decide whether code splitting is needed

2. Analyse network bottlenecks
   - Identify the slowest requests
   - Consider CDN caching

3. Analyse the DOM structure
   - Look for unnecessary DOM nodes
   - Simplify expensive CSS selectors

4. Give concrete advice
   - Lazy-load images
   - Compress assets
   - Enable caching strategies
";

const ACCESSIBILITY_PLAN: &str = "\
[Accessibility review plan]
1. Check HTML semantics
   - Are appropriate tags used?
   - Is the heading structure correct?

2. Check interactive elements
   - Can every control receive focus?
   - Are form labels associated with their inputs?

3. Check visual presentation
   - Is the colour contrast sufficient?
   - Is alternative text (alt) provided?

4. Check animation and dynamic content
   - Is prefers-reduced-motion respected?
   - Are there animation traps?
";

/// Ordered scenario checks. Later rows win over earlier ones when a
/// question matches more than one.
static SCENARIO_RULES: LazyLock<Vec<(Scenario, Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (
            Scenario::PerformanceBottleneck,
            rule(r"为什么|原因|瓶颈|为啥|slow|why|bottleneck"),
            PERFORMANCE_BOTTLENECK_PLAN,
        ),
        (
            Scenario::Optimization,
            rule(r"优化|提升|改进|加快|speed.*up|improve|optimize"),
            OPTIMIZATION_PLAN,
        ),
        (
            Scenario::Accessibility,
            rule(r"无障碍|accessibility|a11y|barrier|inclusive"),
            ACCESSIBILITY_PLAN,
        ),
    ]
});

/// Broader trigger deciding whether plan synthesis runs at all.
static REASONING_TRIGGER: LazyLock<Regex> =
    LazyLock::new(|| rule(r"为什么|原因|优化|无障碍|why|optimize|accessibility"));

fn rule(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("scenario rule pattern must compile")
}

/// Whether plan synthesis should run for this question.
///
/// It runs when classification found no specific intent, or when the
/// question uses why/optimize/accessibility language regardless of the
/// intent that was picked.
pub fn wants_reasoning(question: &str, intent: Intent) -> bool {
    intent == Intent::None || REASONING_TRIGGER.is_match(question)
}

/// Produces the canned analysis plan for the question, if any scenario
/// matches. Checks run in table order and each match overwrites the
/// selection: last match wins.
pub fn synthesize(question: &str) -> Option<&'static str> {
    let mut selected = None;
    for (scenario, rule, plan) in SCENARIO_RULES.iter() {
        if rule.is_match(question) {
            debug!(?scenario, "scenario matched");
            selected = Some(*plan);
        }
    }
    selected
}
