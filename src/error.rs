// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11y-guide

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GuideError>;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid color \"{0}\": expected 6 hex digits, optionally prefixed with '#'")]
    InvalidColor(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
