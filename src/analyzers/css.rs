// SPDX-License-Identifier: PMPL-1.0-or-later
//! Inline color rule - WCAG 1.4.3 Contrast (Minimum)
//!
//! Inline `style` attributes that set `color` or `background-color` can't be
//! verified statically. Only the first such element is reported, as a nudge
//! to check the pair with the contrast analyzer.

use crate::analyzers::{issue_at, selector, Rule};
use crate::config::LinterConfig;
use crate::issue::{Issue, RuleId, Severity};
use scraper::Html;

/// Rule for inline color styling
pub struct InlineColorRule;

impl Rule for InlineColorRule {
    fn ids(&self) -> &[RuleId] {
        &[RuleId::InlineColor]
    }

    fn description(&self) -> &str {
        "Inline color styles should be checked for contrast (WCAG 1.4.3)"
    }

    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue> {
        let style_selector = selector("[style]");

        document
            .select(&style_selector)
            .find(|el| {
                el.value()
                    .attr("style")
                    .is_some_and(|style| style.to_lowercase().contains("color"))
            })
            .map(|el| {
                issue_at(
                    RuleId::InlineColor,
                    Severity::Info,
                    "Inline color styling found. Verify the text/background pair with the contrast checker.",
                    el,
                    config,
                )
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<Issue> {
        InlineColorRule.check(&Html::parse_fragment(html), &LinterConfig::default())
    }

    #[test]
    fn test_inline_color() {
        let issues = check(r#"<p style="color: #999">Faint</p>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[0].tag_name, "p");
    }

    #[test]
    fn test_background_color() {
        assert_eq!(check(r#"<div style="Background-Color: yellow">x</div>"#).len(), 1);
    }

    #[test]
    fn test_only_first_reported() {
        let issues = check(
            r#"<span style="margin: 0">a</span><p style="color: red">b</p><div style="color: blue">c</div>"#,
        );
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].tag_name, "p");
    }

    #[test]
    fn test_unrelated_styles_ignored() {
        assert!(check(r#"<div style="margin: 0; padding: 4px">x</div>"#).is_empty());
    }
}
