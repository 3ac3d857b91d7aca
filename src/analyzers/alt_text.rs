// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text rule - WCAG 1.1.1 Non-text Content (Level A)
//!
//! Checks that all `<img>` elements carry useful alt text:
//! - Every `<img>` must have an `alt` attribute (Error)
//! - Alt text that is empty or generic ("image", "photo", ...) is flagged (Warning)

use crate::analyzers::{issue_at, selector, Rule};
use crate::config::LinterConfig;
use crate::issue::{Issue, RuleId, Severity};
use scraper::Html;

/// Alt values that say nothing about the image
pub const GENERIC_ALT_VALUES: &[&str] = &["image", "picture", "photo", "img"];

/// Rule for image alt text
pub struct AltTextRule;

impl Rule for AltTextRule {
    fn ids(&self) -> &[RuleId] {
        &[RuleId::ImgMissingAlt, RuleId::ImgGenericAlt]
    }

    fn description(&self) -> &str {
        "Images need descriptive alt text (WCAG 1.1.1)"
    }

    fn check(&self, document: &Html, config: &LinterConfig) -> Vec<Issue> {
        let img_selector = selector("img");
        let mut issues = Vec::new();

        for element in document.select(&img_selector) {
            match element.value().attr("alt") {
                None => {
                    issues.push(issue_at(
                        RuleId::ImgMissingAlt,
                        Severity::Error,
                        "Image is missing an alt attribute. Add alt=\"description\" for informative images.",
                        element,
                        config,
                    ));
                }
                Some(alt) => {
                    let alt_trimmed = alt.trim().to_lowercase();
                    if alt_trimmed.is_empty() {
                        issues.push(issue_at(
                            RuleId::ImgGenericAlt,
                            Severity::Warning,
                            "Image has empty alt text. Make sure the image is purely decorative.",
                            element,
                            config,
                        ));
                    } else if is_generic(&alt_trimmed, config) {
                        issues.push(issue_at(
                            RuleId::ImgGenericAlt,
                            Severity::Warning,
                            &format!(
                                "Image has generic alt text \"{}\". Alt text should describe the image.",
                                alt.trim()
                            ),
                            element,
                            config,
                        ));
                    }
                }
            }
        }

        issues
    }
}

fn is_generic(alt_lower: &str, config: &LinterConfig) -> bool {
    GENERIC_ALT_VALUES.contains(&alt_lower)
        || config
            .extra_generic_alt
            .iter()
            .any(|extra| extra.trim().eq_ignore_ascii_case(alt_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(html: &str) -> Vec<Issue> {
        AltTextRule.check(&Html::parse_fragment(html), &LinterConfig::default())
    }

    #[test]
    fn test_missing_alt() {
        let issues = check("<img src='x.png'>");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::ImgMissingAlt);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].tag_name, "img");
        assert!(issues[0].snippet.contains("x.png"));
    }

    #[test]
    fn test_descriptive_alt() {
        assert!(check("<img src='x.png' alt='Sunset over the bay'>").is_empty());
    }

    #[test]
    fn test_generic_alt_case_insensitive() {
        for alt in ["image", "Picture", " PHOTO ", "img"] {
            let issues = check(&format!("<img src='x.png' alt='{}'>", alt));
            assert_eq!(issues.len(), 1, "alt {:?}", alt);
            assert_eq!(issues[0].rule, RuleId::ImgGenericAlt);
            assert_eq!(issues[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn test_empty_alt_warns() {
        for html in ["<img src='x.png' alt=''>", "<img src='x.png' alt='   '>", "<img src='x.png' alt>"] {
            let issues = check(html);
            assert_eq!(issues.len(), 1, "{}", html);
            assert_eq!(issues[0].severity, Severity::Warning);
        }
    }

    #[test]
    fn test_extra_generic_values() {
        let config = LinterConfig {
            extra_generic_alt: vec!["Logo".to_string()],
            ..LinterConfig::default()
        };
        let document = Html::parse_fragment("<img src='l.svg' alt='logo'>");
        let issues = AltTextRule.check(&document, &config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule, RuleId::ImgGenericAlt);
    }

    #[test]
    fn test_document_order_interleaves() {
        let issues = check("<img src='a.png' alt='photo'><img src='b.png'>");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].rule, RuleId::ImgGenericAlt);
        assert_eq!(issues[1].rule, RuleId::ImgMissingAlt);
    }
}
