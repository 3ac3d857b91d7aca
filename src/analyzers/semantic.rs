// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy rule - WCAG 1.3.1 Info and Relationships (Level A)
//!
//! Headings (h1-h6, in document order) should not skip levels going down.
//! The first heading is never flagged, and moving back up any number of
//! levels is fine.

use crate::analyzers::{issue_at, selector, Rule};
use crate::config::LinterConfig;
use crate::issue::{Issue, RuleId, Severity};
use scraper::{ElementRef, Html};

/// Rule for skipped heading levels
pub struct HeadingSkipRule;

impl Rule for HeadingSkipRule {
    fn ids(&self) -> &[RuleId] {
        &[RuleId::HeadingSkip]
    }

    fn description(&self) -> &str {
        "Heading levels should not be skipped (WCAG 1.3.1)"
    }

    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue> {
        let heading_selector = selector("h1, h2, h3, h4, h5, h6");
        let headings: Vec<(u8, ElementRef<'_>)> = document
            .select(&heading_selector)
            .filter_map(|el| heading_level(el).map(|level| (level, el)))
            .collect();

        headings
            .windows(2)
            .filter(|pair| pair[1].0 > pair[0].0 + 1)
            .map(|pair| {
                let (prev, _) = pair[0];
                let (curr, element) = pair[1];
                issue_at(
                    RuleId::HeadingSkip,
                    Severity::Warning,
                    &format!(
                        "Heading level skipped from <h{}> to <h{}>. Use <h{}> or add the missing levels.",
                        prev,
                        curr,
                        prev + 1
                    ),
                    element,
                    config,
                )
            })
            .collect()
    }
}

fn heading_level(element: ElementRef<'_>) -> Option<u8> {
    element
        .value()
        .name()
        .strip_prefix('h')
        .and_then(|n| n.parse::<u8>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<Issue> {
        HeadingSkipRule.check(&Html::parse_fragment(html), &LinterConfig::default())
    }

    #[test]
    fn test_skip_from_h1_to_h3() {
        let issues = check("<h1>A</h1><h3>B</h3>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].tag_name, "h3");
        assert!(issues[0].message.contains("<h1> to <h3>"));
    }

    #[test]
    fn test_sequential_headings() {
        assert!(check("<h1>A</h1><h2>B</h2>").is_empty());
        assert!(check("<h1>A</h1><h2>B</h2><h3>C</h3><h2>D</h2>").is_empty());
    }

    #[test]
    fn test_first_heading_never_flagged() {
        assert!(check("<h4>Start deep</h4>").is_empty());
        assert!(check("<h3>A</h3><h4>B</h4>").is_empty());
    }

    #[test]
    fn test_going_up_is_allowed() {
        assert!(check("<h1>A</h1><h2>B</h2><h3>C</h3><h1>D</h1>").is_empty());
    }

    #[test]
    fn test_nested_headings_in_document_order() {
        let issues = check("<section><h2>A</h2><div><h5>B</h5></div></section><h6>C</h6>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].tag_name, "h5");
    }

    #[test]
    fn test_compares_with_previous_heading() {
        let issues = check("<h1>A</h1><h3>B</h3><h5>C</h5>");
        assert_eq!(issues.len(), 2);
    }
}
