// SPDX-License-Identifier: PMPL-1.0-or-later
//! Link name rule - WCAG 2.4.4 Link Purpose (Level A)
//!
//! An `<a>` needs an accessible name: visible text, an ARIA label, a title,
//! or an image inside it with alt text.

use crate::analyzers::{has_attribute_name, issue_at, selector, trimmed_text, Rule};
use crate::config::LinterConfig;
use crate::issue::{Issue, RuleId, Severity};
use scraper::{ElementRef, Html};

/// Rule for links without an accessible name
pub struct LinkNameRule;

impl Rule for LinkNameRule {
    fn ids(&self) -> &[RuleId] {
        &[RuleId::LinkName]
    }

    fn description(&self) -> &str {
        "Links need an accessible name (WCAG 2.4.4)"
    }

    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue> {
        let link_selector = selector("a");

        document
            .select(&link_selector)
            .filter(|link| {
                trimmed_text(*link).is_empty()
                    && !has_attribute_name(*link)
                    && !has_named_image(*link)
            })
            .map(|link| {
                issue_at(
                    RuleId::LinkName,
                    Severity::Error,
                    "Link has no accessible name. Add link text, aria-label, or an image with alt text.",
                    link,
                    config,
                )
            })
            .collect()
    }
}

fn has_named_image(link: ElementRef<'_>) -> bool {
    let img_selector = selector("img[alt]");
    link.select(&img_selector)
        .any(|img| img.value().attr("alt").is_some_and(|alt| !alt.trim().is_empty()))
}
