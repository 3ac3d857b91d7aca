// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration for a11y-guide
//!
//! Loaded from `a11y-guide.toml` (or a YAML file given with `--config`).
//! A missing file means defaults; every field is optional.

use crate::error::{GuideError, Result};
use crate::issue::RuleId;
use crate::report::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "a11y-guide.toml";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Linter rule settings
    #[serde(default)]
    pub linter: LinterConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory names skipped when scanning
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            linter: LinterConfig::default(),
            output: OutputConfig::default(),
            exclude: default_exclude(),
        }
    }
}

/// Linter rule configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Rules that are not run
    #[serde(default)]
    pub disabled_rules: Vec<RuleId>,

    /// Alt values treated as generic on top of the built-in list
    #[serde(default)]
    pub extra_generic_alt: Vec<String>,

    /// Maximum excerpt length in characters
    #[serde(default = "default_snippet_limit")]
    pub snippet_limit: usize,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            disabled_rules: Vec::new(),
            extra_generic_alt: Vec::new(),
            snippet_limit: default_snippet_limit(),
        }
    }
}

impl LinterConfig {
    pub fn is_disabled(&self, rule: RuleId) -> bool {
        self.disabled_rules.contains(&rule)
    }
}

/// Report output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_exclude() -> Vec<String> {
    vec![
        "node_modules".to_string(),
        ".git".to_string(),
        "target".to_string(),
        "dist".to_string(),
        "build".to_string(),
        "vendor".to_string(),
    ]
}

fn default_snippet_limit() -> usize {
    100
}

/// Config path used when none is given on the command line
pub fn default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}

/// Load configuration; a missing file yields the defaults
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = if path.extension().and_then(|s| s.to_str()) == Some("toml") {
        toml::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    if config.linter.snippet_limit == 0 {
        return Err(GuideError::Config(
            "linter.snippet_limit must be at least 1".to_string(),
        ));
    }

    debug!("Loaded config from {}", path.display());
    Ok(config)
}
