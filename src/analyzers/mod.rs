// SPDX-License-Identifier: PMPL-1.0-or-later
//! Static accessibility rules run over a parsed HTML fragment.
//!
//! Each rule module covers one WCAG concern. Rules are independent: they
//! never see each other's output, and [`analyze_with`] runs them in the
//! fixed order returned by [`all_rules`].

pub mod alt_text;
pub mod aria;
pub mod css;
pub mod forms;
pub mod keyboard;
pub mod links;
pub mod semantic;

use crate::config::LinterConfig;
use crate::issue::{Analysis, Issue, IssueSet, RuleId, Severity};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Rule ids this rule can emit
    fn ids(&self) -> &[RuleId];

    /// Short description of what this rule checks
    fn description(&self) -> &str;

    /// Run the rule over a parsed fragment
    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue>;
}

/// All rules, in evaluation order
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(alt_text::AltTextRule),
        Box::new(links::LinkNameRule),
        Box::new(forms::FormLabelRule),
        Box::new(aria::RoleNameRule),
        Box::new(semantic::HeadingSkipRule),
        Box::new(keyboard::PositiveTabindexRule),
        Box::new(css::InlineColorRule),
    ]
}

/// Lint an HTML fragment with the default rule set
pub fn analyze(html: &str) -> Analysis {
    analyze_with(html, &LinterConfig::default())
}

/// Lint an HTML fragment
///
/// Blank input yields [`Analysis::NothingToAnalyze`]. Malformed markup is
/// never an error; html5ever always produces a best-effort tree.
pub fn analyze_with(html: &str, config: &LinterConfig) -> Analysis {
    if html.trim().is_empty() {
        return Analysis::NothingToAnalyze;
    }

    let document = Html::parse_fragment(html);
    let mut issues = IssueSet::new();

    for rule in all_rules() {
        if rule.ids().iter().all(|id| config.is_disabled(*id)) {
            continue;
        }
        issues.extend(
            rule.check(&document, config)
                .into_iter()
                .filter(|issue| !config.is_disabled(issue.rule)),
        );
    }

    debug!(
        "Analyzed {} bytes of markup, found {} issues",
        html.len(),
        issues.len()
    );

    Analysis::Completed(issues)
}

pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Outer HTML of `element`, cut to `limit` characters with a trailing ellipsis
pub(crate) fn snippet(element: ElementRef<'_>, limit: usize) -> String {
    truncate(&element.html(), limit)
}

pub(crate) fn truncate(markup: &str, limit: usize) -> String {
    if markup.chars().count() <= limit {
        return markup.to_string();
    }
    let mut out: String = markup.chars().take(limit.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Text content with surrounding whitespace removed
pub(crate) fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Whether the element is named by aria-label, aria-labelledby or title
pub(crate) fn has_attribute_name(element: ElementRef<'_>) -> bool {
    ["aria-label", "aria-labelledby", "title"]
        .iter()
        .any(|attr| has_non_empty_attr(element, attr))
}

pub(crate) fn has_non_empty_attr(element: ElementRef<'_>, attr: &str) -> bool {
    element
        .value()
        .attr(attr)
        .is_some_and(|v| !v.trim().is_empty())
}

/// Build an issue pointing at `element`
pub(crate) fn issue_at(
    rule: RuleId,
    severity: Severity,
    message: &str,
    element: ElementRef<'_>,
    config: &LinterConfig,
) -> Issue {
    Issue::new(rule, severity, message)
        .with_tag(element.value().name())
        .with_snippet(snippet(element, config.snippet_limit))
}
