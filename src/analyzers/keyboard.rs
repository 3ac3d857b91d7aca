// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard rule - WCAG 2.4.3 Focus Order (Level A)
//!
//! A positive `tabindex` pulls an element ahead of the natural tab order.
//! `0` and negative values are fine; non-numeric values are ignored.

use crate::analyzers::{issue_at, selector, Rule};
use crate::config::LinterConfig;
use crate::issue::{Issue, RuleId, Severity};
use scraper::Html;

/// Rule for positive tabindex values
pub struct PositiveTabindexRule;

impl Rule for PositiveTabindexRule {
    fn ids(&self) -> &[RuleId] {
        &[RuleId::PositiveTabindex]
    }

    fn description(&self) -> &str {
        "Avoid positive tabindex values (WCAG 2.4.3)"
    }

    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue> {
        let tabindex_selector = selector("[tabindex]");
        let mut issues = Vec::new();

        for el in document.select(&tabindex_selector) {
            let Some(val) = el.value().attr("tabindex").and_then(parse_tabindex) else {
                continue;
            };
            if val > 0 {
                issues.push(issue_at(
                    RuleId::PositiveTabindex,
                    Severity::Warning,
                    &format!(
                        "Element <{}> has tabindex=\"{}\". Positive tabindex disrupts the natural tab order; use 0 or -1.",
                        el.value().name(),
                        val
                    ),
                    el,
                    config,
                ));
            }
        }

        issues
    }
}

fn parse_tabindex(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
