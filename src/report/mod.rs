// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for linter and contrast results.
//!
//! Supports multiple output formats:
//! - Text: summary line plus one entry per issue
//! - JSON: structured results for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::contrast::{Color, ContrastResult};
use crate::issue::{Analysis, Issue, IssueSet, Severity, Summary};
use crate::scanner::ScanResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

pub const NOTHING_TO_ANALYZE: &str = "Nothing to analyze: paste some HTML first.";
pub const NO_ISSUES: &str = "No accessibility issues found. All checks passed.";

/// Generate a report for one linter call
pub fn generate_report(analysis: &Analysis, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(analysis),
        OutputFormat::Json => generate_json_report(analysis),
        OutputFormat::Sarif => {
            let issues = analysis.issues().cloned().unwrap_or_default();
            generate_sarif(&[(None, &issues)])
        }
    }
}

/// Generate a report for a directory scan
pub fn generate_scan_report(scan: &ScanResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_scan_report(scan),
        OutputFormat::Json => to_json(&ScanJson {
            generated_at: Utc::now(),
            summary: scan.summary(),
            scan,
        }),
        OutputFormat::Sarif => {
            let paths: Vec<String> = scan
                .files
                .iter()
                .map(|f| f.path.display().to_string())
                .collect();
            let entries: Vec<(Option<&str>, &IssueSet)> = scan
                .files
                .iter()
                .zip(&paths)
                .filter_map(|(f, path)| f.analysis.issues().map(|issues| (Some(path.as_str()), issues)))
                .collect();
            generate_sarif(&entries)
        }
    }
}

/// Render the one-line summary for an analysis
pub fn summary_line(analysis: &Analysis) -> String {
    match analysis {
        Analysis::NothingToAnalyze => NOTHING_TO_ANALYZE.to_string(),
        Analysis::Completed(issues) if issues.is_empty() => NO_ISSUES.to_string(),
        Analysis::Completed(issues) => issues.summary().to_string(),
    }
}

fn generate_text_report(analysis: &Analysis) -> String {
    let mut output = String::new();
    output.push_str("=== Accessibility Check Report ===\n\n");
    push_analysis_text(&mut output, analysis);
    output
}

fn push_analysis_text(output: &mut String, analysis: &Analysis) {
    output.push_str(&summary_line(analysis));
    output.push('\n');

    let Some(issues) = analysis.issues() else {
        return;
    };

    for issue in issues {
        output.push('\n');
        push_issue_text(output, issue);
    }
}

fn push_issue_text(output: &mut String, issue: &Issue) {
    output.push_str(&format!(
        "[{}] {} (WCAG {}): {}\n",
        issue.severity, issue.rule, issue.wcag_criterion, issue.message
    ));
    if !issue.tag_name.is_empty() {
        output.push_str(&format!("  Element: <{}>\n", issue.tag_name));
    }
    if !issue.snippet.is_empty() {
        output.push_str(&format!("  Markup: {}\n", issue.snippet));
    }
}

fn generate_text_scan_report(scan: &ScanResult) -> String {
    let mut output = String::new();
    output.push_str("=== Accessibility Scan Report ===\n\n");

    if scan.files.is_empty() {
        output.push_str("No HTML files found.\n");
        return output;
    }

    for file in &scan.files {
        output.push_str(&format!("--- {} ---\n", file.path.display()));
        push_analysis_text(&mut output, &file.analysis);
        output.push('\n');
    }

    let summary = scan.summary();
    output.push_str(&format!("Scanned {} file(s). {}\n", scan.files.len(), summary));

    if summary.errors > 0 {
        output.push_str("RESULT: FAIL (errors found)\n");
    } else if summary.warnings > 0 {
        output.push_str("RESULT: PASS WITH WARNINGS\n");
    } else {
        output.push_str("RESULT: PASS\n");
    }

    output
}

#[derive(Serialize)]
struct AnalysisJson<'a> {
    generated_at: DateTime<Utc>,
    summary: Option<Summary>,
    #[serde(flatten)]
    analysis: &'a Analysis,
}

#[derive(Serialize)]
struct ScanJson<'a> {
    generated_at: DateTime<Utc>,
    summary: Summary,
    #[serde(flatten)]
    scan: &'a ScanResult,
}

fn generate_json_report(analysis: &Analysis) -> String {
    to_json(&AnalysisJson {
        generated_at: Utc::now(),
        summary: analysis.issues().map(IssueSet::summary),
        analysis,
    })
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

/// Contrast result in the requested format; SARIF has no contrast form and renders as JSON
pub fn generate_contrast_report(
    foreground: Color,
    background: Color,
    result: &ContrastResult,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            let badge = |pass: bool| if pass { "PASS" } else { "FAIL" };
            let mut output = String::new();
            output.push_str(&format!("Foreground: {}\n", foreground));
            output.push_str(&format!("Background: {}\n", background));
            output.push_str(&format!("Contrast ratio: {}:1\n", result.ratio_display()));
            output.push_str(&format!("  WCAG AA  (4.5:1) {}\n", badge(result.meets_aa)));
            output.push_str(&format!("  WCAG AAA (7:1)   {}\n", badge(result.meets_aaa)));
            output.push_str(&format!(
                "  Large text: AA {} / AAA {}\n",
                badge(result.meets_aa_large),
                badge(result.meets_aaa_large)
            ));
            output.push_str(&result.announcement());
            output.push('\n');
            output
        }
        OutputFormat::Json | OutputFormat::Sarif => {
            #[derive(Serialize)]
            struct ContrastJson<'a> {
                foreground: String,
                background: String,
                #[serde(flatten)]
                result: &'a ContrastResult,
                announcement: String,
            }
            to_json(&ContrastJson {
                foreground: foreground.to_hex(),
                background: background.to_hex(),
                result,
                announcement: result.announcement(),
            })
        }
    }
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    region: SarifRegion,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifRegion {
    snippet: SarifMessage,
}

fn sarif_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "note",
    }
}

fn generate_sarif(entries: &[(Option<&str>, &IssueSet)]) -> String {
    let results: Vec<SarifResult> = entries
        .iter()
        .flat_map(|(uri, issues)| {
            issues.iter().map(move |issue| SarifResult {
                rule_id: issue.rule.to_string(),
                level: sarif_level(issue.severity).to_string(),
                message: SarifMessage {
                    text: issue.message.clone(),
                },
                locations: (*uri)
                    .map(|uri| SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation {
                                uri: uri.to_string(),
                            },
                            region: SarifRegion {
                                snippet: SarifMessage {
                                    text: issue.snippet.clone(),
                                },
                            },
                        },
                    })
                    .into_iter()
                    .collect(),
            })
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "a11y-guide".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            },
            results,
        }],
    };

    to_json(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::RuleId;

    fn sample_analysis() -> Analysis {
        let mut issues = IssueSet::new();
        issues.add(
            Issue::new(RuleId::ImgMissingAlt, Severity::Error, "Missing alt")
                .with_tag("img")
                .with_snippet("<img src=\"x.png\">".to_string()),
        );
        issues.add(Issue::new(RuleId::InlineColor, Severity::Info, "Inline color").with_tag("p"));
        Analysis::Completed(issues)
    }

    #[test]
    fn test_text_report_nothing_to_analyze() {
        let report = generate_report(&Analysis::NothingToAnalyze, OutputFormat::Text);
        assert!(report.contains(NOTHING_TO_ANALYZE));
        assert!(!report.contains(NO_ISSUES));
    }

    #[test]
    fn test_text_report_empty() {
        let report = generate_report(&Analysis::Completed(IssueSet::new()), OutputFormat::Text);
        assert!(report.contains(NO_ISSUES));
    }

    #[test]
    fn test_text_report_with_issues() {
        let report = generate_report(&sample_analysis(), OutputFormat::Text);
        assert!(report.contains("1 error, 0 warnings, 1 note found."));
        assert!(report.contains("[ERROR] img-missing-alt (WCAG 1.1.1): Missing alt"));
        assert!(report.contains("  Markup: <img src=\"x.png\">"));
        assert!(report.contains("[INFO] inline-color"));
        let error_at = report.find("[ERROR]").unwrap();
        let info_at = report.find("[INFO]").unwrap();
        assert!(error_at < info_at);
    }

    #[test]
    fn test_json_report() {
        let report = generate_report(&sample_analysis(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["status"], "completed");
        assert_eq!(parsed["summary"]["errors"], 1);
        assert_eq!(parsed["result"]["issues"][0]["rule"], "img-missing-alt");
        assert_eq!(parsed["result"]["issues"][0]["severity"], "error");
    }

    #[test]
    fn test_json_report_nothing_to_analyze() {
        let report = generate_report(&Analysis::NothingToAnalyze, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["status"], "nothing_to_analyze");
        assert!(parsed["summary"].is_null());
    }

    #[test]
    fn test_sarif_report() {
        let report = generate_report(&sample_analysis(), OutputFormat::Sarif);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["version"], "2.1.0");
        let results = parsed["runs"][0]["results"].as_array().unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["level"], "error");
        assert_eq!(results[1]["level"], "note");
    }

    #[test]
    fn test_contrast_text_report() {
        let result = ContrastResult::from_colors(Color::new(0x76, 0x76, 0x76), Color::WHITE);
        let report = generate_contrast_report(
            Color::new(0x76, 0x76, 0x76),
            Color::WHITE,
            &result,
            OutputFormat::Text,
        );
        assert!(report.contains("Contrast ratio: 4.54:1"));
        assert!(report.contains("WCAG AA  (4.5:1) PASS"));
        assert!(report.contains("WCAG AAA (7:1)   FAIL"));
        assert!(report.contains("Contrast ratio 4.54. WCAG AA passes, WCAG AAA fails."));
    }

    #[test]
    fn test_contrast_json_report() {
        let result = ContrastResult::from_colors(Color::BLACK, Color::WHITE);
        let report =
            generate_contrast_report(Color::BLACK, Color::WHITE, &result, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&report).expect("valid JSON");
        assert_eq!(parsed["foreground"], "#000000");
        assert_eq!(parsed["meets_aaa"], true);
        assert!((parsed["ratio"].as_f64().unwrap() - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
