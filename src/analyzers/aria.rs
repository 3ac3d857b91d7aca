// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA role name rule - WCAG 4.1.2 Name, Role, Value (Level A)
//!
//! Elements that claim `role="button"` or `role="link"` must expose a name
//! through text content, `aria-label`, `aria-labelledby` or `title`.

use crate::analyzers::{has_attribute_name, issue_at, selector, trimmed_text, Rule};
use crate::config::LinterConfig;
use crate::issue::{Issue, RuleId, Severity};
use scraper::Html;

/// Roles that need an accessible name
const NAMED_ROLES: &[&str] = &["button", "link"];

/// Rule for unnamed interactive roles
pub struct RoleNameRule;

impl Rule for RoleNameRule {
    fn ids(&self) -> &[RuleId] {
        &[RuleId::RoleName]
    }

    fn description(&self) -> &str {
        "Elements with role=button or role=link need an accessible name (WCAG 4.1.2)"
    }

    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue> {
        let role_selector = selector("[role]");
        let mut issues = Vec::new();

        for element in document.select(&role_selector) {
            let Some(role) = element.value().attr("role") else {
                continue;
            };
            let role = role.trim().to_lowercase();
            if !NAMED_ROLES.contains(&role.as_str()) {
                continue;
            }
            if !trimmed_text(element).is_empty() || has_attribute_name(element) {
                continue;
            }

            issues.push(issue_at(
                RuleId::RoleName,
                Severity::Error,
                &format!(
                    "<{}> with role=\"{}\" has no accessible name. Add text content, aria-label, or aria-labelledby.",
                    element.value().name(),
                    role
                ),
                element,
                config,
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<Issue> {
        RoleNameRule.check(&Html::parse_fragment(html), &LinterConfig::default())
    }

    #[test]
    fn test_unnamed_div_button() {
        let issues = check(r#"<div role="button" onclick="go()"><i class="icon-close"></i></div>"#);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].tag_name, "div");
        assert!(issues[0].message.contains("role=\"button\""));
    }

    #[test]
    fn test_unnamed_span_link() {
        assert_eq!(check(r#"<span role="LINK"> </span>"#).len(), 1);
    }

    #[test]
    fn test_named_roles() {
        let named = [
            r#"<div role="button">Save</div>"#,
            r#"<div role="button" aria-label="Close"></div>"#,
            r#"<div role="link" aria-labelledby="lbl"></div>"#,
            r#"<span role="link" title="Docs"></span>"#,
        ];
        for html in named {
            assert!(check(html).is_empty(), "{} should be named", html);
        }
    }

    #[test]
    fn test_other_roles_ignored() {
        assert!(check(r#"<div role="presentation"></div><div role="navigation"></div>"#).is_empty());
    }
}
