// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-guide - WCAG contrast checker and static HTML accessibility linter
//!
//! Two independent, stateless tools:
//!
//! - **Contrast** ([`contrast`]): WCAG 2.x contrast ratio between two
//!   `#rrggbb` colors with AA/AAA pass/fail.
//! - **Linter** ([`analyzers`]): parses an HTML fragment and runs a fixed
//!   battery of structural rules over it.
//!
//! ## Rules
//!
//! - **Alt Text** (1.1.1): missing, empty, or generic image alt text
//! - **Links** (2.4.4): links without an accessible name
//! - **Forms** (3.3.2): unlabeled inputs, textareas, and selects
//! - **ARIA** (4.1.2): unnamed `role="button"` / `role="link"`
//! - **Semantic** (1.3.1): skipped heading levels
//! - **Keyboard** (2.4.3): positive tabindex
//! - **CSS** (1.4.3): inline color styling

pub mod analyzers;
pub mod config;
pub mod contrast;
pub mod error;
pub mod issue;
pub mod report;
pub mod scanner;

pub use analyzers::{analyze, analyze_with};
pub use config::{Config, LinterConfig};
pub use contrast::{contrast_ratio, Color, ContrastResult};
pub use error::{GuideError, Result};
pub use issue::{Analysis, Issue, IssueSet, RuleId, Severity};
