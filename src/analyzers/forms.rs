// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label rule - WCAG 3.3.2 Labels or Instructions (Level A)
//!
//! Every `<input>`, `<textarea>` and `<select>` (except `type="hidden"`)
//! needs a label: `<label for=id>`, an enclosing `<label>`, `aria-label`,
//! or `aria-labelledby`.

use crate::analyzers::{has_non_empty_attr, issue_at, selector, Rule};
use crate::config::LinterConfig;
use crate::issue::{Issue, RuleId, Severity};
use scraper::{ElementRef, Html};
use std::collections::HashSet;

/// Rule for unlabeled form controls
pub struct FormLabelRule;

impl Rule for FormLabelRule {
    fn ids(&self) -> &[RuleId] {
        &[RuleId::FormLabel]
    }

    fn description(&self) -> &str {
        "Form controls need a label (WCAG 3.3.2)"
    }

    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue> {
        let label_selector = selector("label[for]");
        let control_selector = selector("input, textarea, select");

        let label_fors: HashSet<&str> = document
            .select(&label_selector)
            .filter_map(|l| l.value().attr("for"))
            .collect();

        let mut issues = Vec::new();

        for control in document.select(&control_selector) {
            if is_hidden_input(control) {
                continue;
            }

            let has_for_label = control
                .value()
                .id()
                .is_some_and(|id| label_fors.contains(id));
            let has_aria_label = has_non_empty_attr(control, "aria-label")
                || has_non_empty_attr(control, "aria-labelledby");

            if has_for_label || has_aria_label || is_wrapped_in_label(control) {
                continue;
            }

            let tag = control.value().name();
            let message = match control.value().attr("type") {
                Some(kind) if tag == "input" => format!(
                    "<input type=\"{}\"> has no associated label. Add a <label>, aria-label, or aria-labelledby.",
                    kind
                ),
                _ => format!(
                    "<{}> has no associated label. Add a <label>, aria-label, or aria-labelledby.",
                    tag
                ),
            };
            issues.push(issue_at(RuleId::FormLabel, Severity::Error, &message, control, config));
        }

        issues
    }
}

fn is_hidden_input(control: ElementRef<'_>) -> bool {
    control.value().name() == "input"
        && control
            .value()
            .attr("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case("hidden"))
}

fn is_wrapped_in_label(control: ElementRef<'_>) -> bool {
    control
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ancestor.value().name() == "label")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<Issue> {
        FormLabelRule.check(&Html::parse_fragment(html), &LinterConfig::default())
    }

    #[test]
    fn test_unlabeled_input() {
        let issues = check("<input type='text'>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].tag_name, "input");
        assert!(issues[0].message.contains("type=\"text\""));
    }

    #[test]
    fn test_label_for() {
        assert!(check("<label for='n'>Name</label><input id='n' type='text'>").is_empty());
    }

    #[test]
    fn test_label_for_other_id() {
        assert_eq!(check("<label for='x'>Name</label><input id='n' type='text'>").len(), 1);
    }

    #[test]
    fn test_enclosing_label() {
        assert!(check("<label>Email <input type='email'></label>").is_empty());
        assert!(check("<label>Bio <span><textarea></textarea></span></label>").is_empty());
    }

    #[test]
    fn test_aria_labels() {
        assert!(check("<input type='search' aria-label='Search'>").is_empty());
        assert!(check("<select aria-labelledby='lang-label'><option>en</option></select>").is_empty());
    }

    #[test]
    fn test_hidden_input_exempt() {
        assert!(check("<input type='hidden' name='csrf'>").is_empty());
        assert!(check("<input type='HIDDEN' name='csrf'>").is_empty());
    }

    #[test]
    fn test_textarea_and_select() {
        let issues = check("<textarea></textarea><select><option>a</option></select>");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].tag_name, "textarea");
        assert_eq!(issues[1].tag_name, "select");
    }

    #[test]
    fn test_input_without_type() {
        let issues = check("<input name='q'>");
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("<input>"));
    }
}
