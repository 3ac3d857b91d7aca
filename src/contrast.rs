// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast analyzer - WCAG 1.4.3 Contrast (Minimum) / 1.4.6 Contrast (Enhanced)
//!
//! Computes the WCAG 2.x contrast ratio between two `#rrggbb` colors.
//! - AA: 4.5:1 for normal text, 3:1 for large text
//! - AAA: 7:1 for normal text, 4.5:1 for large text
//!
//! The lenient entry points ([`contrast_ratio`], [`ContrastResult::between`])
//! never fail: a color that does not parse is treated as black. Use
//! [`Color::from_hex`] to surface the parse error instead.

use crate::error::{GuideError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Minimum ratio for normal text at Level AA
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for normal text at Level AAA
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text at Level AA
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for large text at Level AAA
pub const AAA_LARGE: f64 = 4.5;

/// Channel threshold below which the sRGB curve is linear
const SRGB_LINEAR_THRESHOLD: f64 = 0.03928;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").expect("valid regex")
});

/// A 24-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`. Three-digit shorthand is rejected.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let caps = HEX_COLOR
            .captures(hex.trim())
            .ok_or_else(|| GuideError::InvalidColor(hex.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&caps[i], 16).map_err(|_| GuideError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Parse, falling back to black when the input is not a valid color
    pub fn from_hex_or_black(hex: &str) -> Self {
        Self::from_hex(hex).unwrap_or_else(|_| {
            debug!("Unparseable color {:?}, treating as black", hex);
            Self::BLACK
        })
    }

    /// Relative luminance per WCAG 2.x
    /// <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>
    pub fn relative_luminance(&self) -> f64 {
        let [r, g, b] = [self.r, self.g, self.b].map(linearize);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for Color {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= SRGB_LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Contrast ratio between two colors, in [1.0, 21.0]
pub fn ratio_between(a: Color, b: Color) -> f64 {
    let l1 = a.relative_luminance();
    let l2 = b.relative_luminance();
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex strings; unparseable colors count as black
pub fn contrast_ratio(hex_a: &str, hex_b: &str) -> f64 {
    ratio_between(Color::from_hex_or_black(hex_a), Color::from_hex_or_black(hex_b))
}

/// Contrast ratio with WCAG pass/fail flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub meets_aa_large: bool,
    pub meets_aaa_large: bool,
}

impl ContrastResult {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            meets_aa: ratio >= AA_NORMAL,
            meets_aaa: ratio >= AAA_NORMAL,
            meets_aa_large: ratio >= AA_LARGE,
            meets_aaa_large: ratio >= AAA_LARGE,
        }
    }

    pub fn from_colors(a: Color, b: Color) -> Self {
        Self::from_ratio(ratio_between(a, b))
    }

    /// Lenient: unparseable colors count as black
    pub fn between(hex_a: &str, hex_b: &str) -> Self {
        Self::from_ratio(contrast_ratio(hex_a, hex_b))
    }

    /// Ratio formatted to two decimal places
    pub fn ratio_display(&self) -> String {
        format!("{:.2}", self.ratio)
    }

    /// Sentence announced to assistive technology
    pub fn announcement(&self) -> String {
        format!(
            "Contrast ratio {}. WCAG AA {}, WCAG AAA {}.",
            self.ratio_display(),
            pass_word(self.meets_aa),
            pass_word(self.meets_aaa),
        )
    }
}

fn pass_word(pass: bool) -> &'static str {
    if pass {
        "passes"
    } else {
        "fails"
    }
}
