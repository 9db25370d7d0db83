//! Question intent classification.
//!
//! An ordered, statically inspectable table of keyword rules decides which
//! page-data category a question is about. Rules are case-insensitive and
//! bilingual (Chinese + English); the first matching rule wins, so table
//! order IS the priority order.

use std::sync::LazyLock;

use regex::Regex;

/// The single classified purpose of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// No page-data category applies; answer directly.
    None,
    /// Page DOM structure.
    Dom,
    /// Computed styles and CSS.
    Styles,
    /// Page metadata: title, links, forms, accessibility.
    PageInfo,
    /// Images on the page.
    Images,
    /// Network requests and load performance.
    Network,
}

impl Intent {
    /// Short human description, used in logs.
    pub fn description(self) -> &'static str {
        match self {
            Intent::None => "no page data needed, answer directly",
            Intent::Dom => "page DOM structure",
            Intent::Styles => "page style information",
            Intent::PageInfo => "page element statistics",
            Intent::Images => "page image list",
            Intent::Network => "network request analysis",
        }
    }
}

/// Ordered classification rules; first match wins.
///
/// DOM outranks styles, styles outrank page info, and so on down to
/// network. Grow a row's vocabulary rather than adding rows, so the
/// priority stays reviewable at a glance.
static INTENT_RULES: LazyLock<Vec<(Intent, Regex)>> = LazyLock::new(|| {
    vec![
        (
            Intent::Dom,
            rule(r"dom|html|结构|标签|元素|语义|h\d|div|span|semantic"),
        ),
        (
            Intent::Styles,
            rule(r"css|样式|颜色|字体|大小|间距|padding|margin|font|color|width|height"),
        ),
        (
            Intent::PageInfo,
            rule(r"页面|标题|链接|表单|可访问性|无障碍|accessibility|a11y|form|input"),
        ),
        (
            Intent::Images,
            rule(r"图片|image|img|picture|photo|src|alt"),
        ),
        (
            Intent::Network,
            rule(r"网络|请求|加载|慢|性能|资源|resource|network|request|speed|slow|performance"),
        ),
    ]
});

fn rule(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){pattern}")).expect("intent rule pattern must compile")
}

/// Classifies a question into exactly one [`Intent`].
///
/// Pure function of the question text; never fails. Unmatched input yields
/// [`Intent::None`].
pub fn classify(question: &str) -> Intent {
    INTENT_RULES
        .iter()
        .find(|(_, rule)| rule.is_match(question))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_questions_classify_as_dom() {
        assert_eq!(classify("is the html structure semantic?"), Intent::Dom);
        assert_eq!(classify("how deep is the DOM tree"), Intent::Dom);
        assert_eq!(classify("这个元素是什么标签"), Intent::Dom);
    }

    #[test]
    fn dom_outranks_styles() {
        // Matches both the DOM set (div) and the style set (padding).
        assert_eq!(classify("does this div need more padding?"), Intent::Dom);
    }

    #[test]
    fn one_tag_per_category() {
        assert_eq!(classify("tweak the font color"), Intent::Styles);
        assert_eq!(classify("list the form inputs"), Intent::PageInfo);
        assert_eq!(classify("are the photos compressed?"), Intent::Images);
        assert_eq!(classify("which requests are slow?"), Intent::Network);
    }

    #[test]
    fn chinese_vocabulary_matches() {
        assert_eq!(classify("页面的标题是什么"), Intent::PageInfo);
        assert_eq!(classify("网络加载太慢了"), Intent::Network);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(classify("CSS GRID question"), Intent::Styles);
    }

    #[test]
    fn unmatched_input_yields_none() {
        assert_eq!(classify("tell me a joke"), Intent::None);
        assert_eq!(classify(""), Intent::None);
    }
}
