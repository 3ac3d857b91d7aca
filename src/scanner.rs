// SPDX-License-Identifier: PMPL-1.0-or-later
//! File and directory scanning.
//!
//! Walks directory trees, picks out HTML files, and lints each one
//! independently.

use crate::analyzers;
use crate::config::{Config, LinterConfig};
use crate::error::Result;
use crate::issue::{Analysis, Summary};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File extensions to scan
const SCANNABLE_EXTENSIONS: &[&str] = &["html", "htm"];

/// Result of linting one file
#[derive(Debug, Clone, Serialize)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub analysis: Analysis,
}

/// Results for every file found by a directory scan, in walk order
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanResult {
    pub files: Vec<ScannedFile>,
}

impl ScanResult {
    /// Counts across all files
    pub fn summary(&self) -> Summary {
        self.files
            .iter()
            .filter_map(|f| f.analysis.issues())
            .fold(Summary::default(), |acc, issues| Summary {
                errors: acc.errors + issues.errors(),
                warnings: acc.warnings + issues.warnings(),
                notes: acc.notes + issues.notes(),
            })
    }

    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|f| f.analysis.has_errors())
    }
}

/// Scan a directory for accessibility issues
pub fn scan_directory(dir: &Path, config: &Config) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    info!("Scanning directory: {}", dir.display());

    let mut entries: Vec<walkdir::DirEntry> = WalkDir::new(dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_str().unwrap_or("");
            if e.file_type().is_dir() && e.depth() > 0 {
                return !config.exclude.iter().any(|x| x == name) && !name.starts_with('.');
            }
            true
        })
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() && is_scannable(e.path()))
        .collect();
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    for entry in entries {
        let path = entry.path();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                info!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        debug!("Linting {}", path.display());
        result.files.push(ScannedFile {
            path: path.to_path_buf(),
            analysis: analyzers::analyze_with(&content, &config.linter),
        });
    }

    info!(
        "Scanned {} files, found {} issues",
        result.files.len(),
        result
            .files
            .iter()
            .filter_map(|f| f.analysis.issues())
            .map(|i| i.len())
            .sum::<usize>()
    );

    Ok(result)
}

/// Lint a single file
pub fn scan_file(path: &Path, config: &LinterConfig) -> Result<Analysis> {
    let content = std::fs::read_to_string(path)?;
    Ok(analyzers::analyze_with(&content, config))
}

fn is_scannable(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SCANNABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_nonexistent_dir() {
        let result = scan_directory(Path::new("/nonexistent/path"), &Config::default());
        // walkdir reports the missing root as an entry error, which is skipped
        assert!(result.unwrap().files.is_empty());
    }

    #[test]
    fn test_scan_skips_excluded_and_non_html() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        std::fs::write(root.join("index.html"), "<img src='a.png'>").unwrap();
        std::fs::write(root.join("notes.txt"), "<img src='a.png'>").unwrap();
        std::fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
        std::fs::write(root.join("node_modules/pkg/demo.html"), "<img src='b.png'>").unwrap();
        std::fs::create_dir_all(root.join("docs")).unwrap();
        std::fs::write(root.join("docs/page.HTM"), "<h1>A</h1><h3>B</h3>").unwrap();
        std::fs::write(root.join("docs/blank.html"), "  \n").unwrap();

        let result = scan_directory(root, &Config::default()).unwrap();
        let names: Vec<String> = result
            .files
            .iter()
            .map(|f| f.path.strip_prefix(root).unwrap().display().to_string())
            .collect();
        assert_eq!(names.len(), 3, "{:?}", names);
        assert!(!names.iter().any(|n| n.contains("node_modules")));

        let summary = result.summary();
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.warnings, 1);
        assert!(result.has_errors());
        assert!(result
            .files
            .iter()
            .any(|f| f.analysis.is_nothing_to_analyze()));
    }

    #[test]
    fn test_scan_file_missing() {
        assert!(scan_file(Path::new("/nonexistent/file.html"), &LinterConfig::default()).is_err());
    }
}
