use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::hex::hex_to_rgb;

/// WCAG gamma linearization of a 0.0-1.0 channel.
/// c <= 0.03928: c/12.92, else ((c+0.055)/1.055)^2.4
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.1, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit().map(linearize);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG 2.1 contrast ratio, in [1, 21], independent of argument order.
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let l1 = luminance(a);
    let l2 = luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    ((lighter + 0.05) / (darker + 0.05)).clamp(1.0, 21.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    #[default]
    Normal,
    /// 18pt+ or 14pt+ bold: relaxed thresholds.
    Large,
}

impl TextSize {
    pub fn aa_threshold(self) -> f64 {
        match self {
            TextSize::Normal => 4.5,
            TextSize::Large => 3.0,
        }
    }

    pub fn aaa_threshold(self) -> f64 {
        match self {
            TextSize::Normal => 7.0,
            TextSize::Large => 4.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceLevel {
    Fail,
    Aa,
    Aaa,
}

impl ComplianceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceLevel::Fail => "fail",
            ComplianceLevel::Aa => "aa",
            ComplianceLevel::Aaa => "aaa",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    pub ratio: f64,
    #[serde(rename = "wcagAA")]
    pub wcag_aa: bool,
    #[serde(rename = "wcagAAA")]
    pub wcag_aaa: bool,
    pub level: ComplianceLevel,
}

impl ContrastReport {
    /// Reported for unparseable input instead of an error.
    pub const INVALID: ContrastReport = ContrastReport {
        ratio: 0.0,
        wcag_aa: false,
        wcag_aaa: false,
        level: ComplianceLevel::Fail,
    };

    /// Classify a ratio against the thresholds for `size`.
    pub fn classify(ratio: f64, size: TextSize) -> Self {
        let wcag_aa = ratio >= size.aa_threshold();
        let wcag_aaa = ratio >= size.aaa_threshold();
        let level = if wcag_aaa {
            ComplianceLevel::Aaa
        } else if wcag_aa {
            ComplianceLevel::Aa
        } else {
            ComplianceLevel::Fail
        };
        ContrastReport {
            ratio,
            wcag_aa,
            wcag_aaa,
            level,
        }
    }
}

pub fn contrast_report(fg: Rgb, bg: Rgb, size: TextSize) -> ContrastReport {
    ContrastReport::classify(contrast_ratio(fg, bg), size)
}

/// Test a hex foreground/background pair for normal text.
/// Malformed hex never errors: it yields [`ContrastReport::INVALID`].
pub fn test_contrast(foreground: &str, background: &str) -> ContrastReport {
    test_contrast_for(foreground, background, TextSize::Normal)
}

pub fn test_contrast_large(foreground: &str, background: &str) -> ContrastReport {
    test_contrast_for(foreground, background, TextSize::Large)
}

pub fn test_contrast_for(foreground: &str, background: &str, size: TextSize) -> ContrastReport {
    match (hex_to_rgb(foreground), hex_to_rgb(background)) {
        (Ok(fg), Ok(bg)) => contrast_report(fg, bg, size),
        _ => {
            tracing::trace!(foreground, background, "unparseable color in contrast test");
            ContrastReport::INVALID
        }
    }
}
