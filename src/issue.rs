// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue model shared by the linter rules and the report renderers.
//!
//! An [`Issue`] has no identity beyond the analysis call that produced it.
//! [`IssueSet`] keeps issues in rule-evaluation order; it is never sorted
//! by severity.

use serde::{Deserialize, Serialize};

/// Severity of a linter issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Definite accessibility failure
    Error,
    /// Likely problem, needs review
    Warning,
    /// Informational nudge
    Info,
}

impl Severity {
    /// Noun used in the one-line summary ("2 errors, 1 warning, 0 notes")
    pub fn summary_noun(&self, count: usize) -> &'static str {
        match (self, count == 1) {
            (Severity::Error, true) => "error",
            (Severity::Error, false) => "errors",
            (Severity::Warning, true) => "warning",
            (Severity::Warning, false) => "warnings",
            (Severity::Info, true) => "note",
            (Severity::Info, false) => "notes",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Info => write!(f, "INFO"),
        }
    }
}

/// Stable identifier of each linter rule, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    ImgMissingAlt,
    ImgGenericAlt,
    LinkName,
    FormLabel,
    RoleName,
    HeadingSkip,
    PositiveTabindex,
    InlineColor,
}

impl RuleId {
    pub const ALL: [RuleId; 8] = [
        RuleId::ImgMissingAlt,
        RuleId::ImgGenericAlt,
        RuleId::LinkName,
        RuleId::FormLabel,
        RuleId::RoleName,
        RuleId::HeadingSkip,
        RuleId::PositiveTabindex,
        RuleId::InlineColor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::ImgMissingAlt => "img-missing-alt",
            RuleId::ImgGenericAlt => "img-generic-alt",
            RuleId::LinkName => "link-name",
            RuleId::FormLabel => "form-label",
            RuleId::RoleName => "role-name",
            RuleId::HeadingSkip => "heading-skip",
            RuleId::PositiveTabindex => "positive-tabindex",
            RuleId::InlineColor => "inline-color",
        }
    }

    /// WCAG success criterion this rule relates to
    pub fn wcag_criterion(&self) -> &'static str {
        match self {
            RuleId::ImgMissingAlt | RuleId::ImgGenericAlt => "1.1.1",
            RuleId::LinkName => "2.4.4",
            RuleId::FormLabel => "3.3.2",
            RuleId::RoleName => "4.1.2",
            RuleId::HeadingSkip => "1.3.1",
            RuleId::PositiveTabindex => "2.4.3",
            RuleId::InlineColor => "1.4.3",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RuleId::ALL
            .into_iter()
            .find(|r| r.as_str() == wanted)
            .ok_or_else(|| format!("Unknown rule: {}", s))
    }
}

/// One finding from the linter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Rule that produced this issue
    pub rule: RuleId,
    /// Severity level
    pub severity: Severity,
    /// Human-readable message
    pub message: String,
    /// Tag name of the offending element (lowercase)
    pub tag_name: String,
    /// Truncated outer HTML of the offending element
    pub snippet: String,
    /// WCAG criterion reference
    pub wcag_criterion: String,
}

impl Issue {
    /// Create a new issue for a rule
    pub fn new(rule: RuleId, severity: Severity, message: &str) -> Self {
        Self {
            rule,
            severity,
            message: message.to_string(),
            tag_name: String::new(),
            snippet: String::new(),
            wcag_criterion: rule.wcag_criterion().to_string(),
        }
    }

    /// Set the offending element's tag name
    pub fn with_tag(mut self, tag_name: &str) -> Self {
        self.tag_name = tag_name.to_string();
        self
    }

    /// Set the markup excerpt
    pub fn with_snippet(mut self, snippet: String) -> Self {
        self.snippet = snippet;
        self
    }
}

/// Per-severity counts used for the summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub notes: usize,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}, {} {}, {} {} found.",
            self.errors,
            Severity::Error.summary_noun(self.errors),
            self.warnings,
            Severity::Warning.summary_noun(self.warnings),
            self.notes,
            Severity::Info.summary_noun(self.notes),
        )
    }
}

/// Ordered collection of issues from one analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSet {
    /// All issues, in rule-evaluation order
    pub issues: Vec<Issue>,
}

impl IssueSet {
    /// Create empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an issue
    pub fn add(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Extend with issues from an iterator
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Get issues by severity
    pub fn by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.severity == severity).collect()
    }

    /// Get issues produced by a rule
    pub fn by_rule(&self, rule: RuleId) -> Vec<&Issue> {
        self.issues.iter().filter(|i| i.rule == rule).collect()
    }

    pub fn errors(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warnings(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn notes(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Counts for the summary line
    pub fn summary(&self) -> Summary {
        Summary {
            errors: self.errors(),
            warnings: self.warnings(),
            notes: self.notes(),
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Total count
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Is empty
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }
}

impl<'a> IntoIterator for &'a IssueSet {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

/// Outcome of one linter call
///
/// Blank input is reported as [`Analysis::NothingToAnalyze`], which is not
/// the same thing as a completed analysis that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Analysis {
    NothingToAnalyze,
    Completed(IssueSet),
}

impl Analysis {
    /// Issues found, or `None` when there was nothing to analyze
    pub fn issues(&self) -> Option<&IssueSet> {
        match self {
            Analysis::NothingToAnalyze => None,
            Analysis::Completed(set) => Some(set),
        }
    }

    /// Consume into the issue set; blank input yields an empty set
    pub fn into_issues(self) -> IssueSet {
        match self {
            Analysis::NothingToAnalyze => IssueSet::new(),
            Analysis::Completed(set) => set,
        }
    }

    pub fn is_nothing_to_analyze(&self) -> bool {
        matches!(self, Analysis::NothingToAnalyze)
    }

    pub fn has_errors(&self) -> bool {
        self.issues().is_some_and(IssueSet::has_errors)
    }
}
