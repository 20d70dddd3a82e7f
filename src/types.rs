//! Records exchanged with JS. Plain Rust structs; under the `node` feature
//! they are also `#[napi(object)]` so NAPI can marshal them.

use crate::brand::ThemeTokens;
use crate::math::checker::{CheckResult, ColorPair, PairCheck};
use crate::math::{ContrastReport, Hsl, Lab, Rgb, SearchOutcome, Xyz};

/// RGB triple as JS numbers (0-255, clamped and rounded on the way in).
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbObject {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl From<Rgb> for RgbObject {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: f64::from(rgb.r),
            g: f64::from(rgb.g),
            b: f64::from(rgb.b),
        }
    }
}

impl From<RgbObject> for Rgb {
    fn from(obj: RgbObject) -> Self {
        Rgb::from_f64(obj.r, obj.g, obj.b)
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HslObject {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Hsl> for HslObject {
    fn from(hsl: Hsl) -> Self {
        Self {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
        }
    }
}

impl From<HslObject> for Hsl {
    fn from(obj: HslObject) -> Self {
        Hsl::new(obj.h, obj.s, obj.l)
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzObject {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Xyz> for XyzObject {
    fn from(xyz: Xyz) -> Self {
        Self {
            x: xyz.x,
            y: xyz.y,
            z: xyz.z,
        }
    }
}

impl From<XyzObject> for Xyz {
    fn from(obj: XyzObject) -> Self {
        Xyz::new(obj.x, obj.y, obj.z)
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabObject {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl From<Lab> for LabObject {
    fn from(lab: Lab) -> Self {
        Self {
            l: lab.l,
            a: lab.a,
            b: lab.b,
        }
    }
}

/// `{ ratio, wcagAA, wcagAAA, level: "fail" | "aa" | "aaa" }`, built from the
/// report's serde form. `napi(object)` would camel-case the flags to `wcagAa`.
pub fn contrast_result(report: ContrastReport) -> serde_json::Value {
    serde_json::to_value(report).unwrap_or_default()
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq)]
pub struct AccessibleColor {
    pub color: String,
    /// false = best effort: the color may still miss the target ratio.
    pub converged: bool,
    pub iterations: u32,
}

impl From<SearchOutcome<String>> for AccessibleColor {
    fn from(outcome: SearchOutcome<String>) -> Self {
        let converged = outcome.is_converged();
        let iterations = outcome.iterations();
        Self {
            color: outcome.into_color(),
            converged,
            iterations,
        }
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPairJs {
    pub label: Option<String>,
    pub foreground: String,
    pub background: String,
    pub large_text: Option<bool>,
}

impl From<ColorPairJs> for ColorPair {
    fn from(js: ColorPairJs) -> Self {
        ColorPair {
            label: js.label,
            foreground: js.foreground,
            background: js.background,
            large_text: js.large_text.unwrap_or(false),
        }
    }
}

/// One audited pair, flattened (NAPI doesn't support nested struct reuse well).
#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq)]
pub struct PairCheckJs {
    pub label: Option<String>,
    pub foreground: String,
    pub background: String,
    pub large_text: bool,
    pub ratio: f64,
    pub level: String,
    pub suggestion: Option<String>,
    pub suggestion_converged: bool,
}

impl From<PairCheck> for PairCheckJs {
    fn from(check: PairCheck) -> Self {
        Self {
            label: check.pair.label,
            foreground: check.pair.foreground,
            background: check.pair.background,
            large_text: check.pair.large_text,
            // Rounded to 2 decimals for display, like the contrast reports in the UI
            ratio: (check.report.ratio * 100.0).round() / 100.0,
            level: check.report.level.as_str().to_string(),
            suggestion: check.suggestion,
            suggestion_converged: check.suggestion_converged,
        }
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResultJs {
    pub violations: Vec<PairCheckJs>,
    pub passed: Vec<PairCheckJs>,
    pub skipped_count: u32,
}

impl From<CheckResult> for CheckResultJs {
    fn from(result: CheckResult) -> Self {
        Self {
            violations: result.violations.into_iter().map(Into::into).collect(),
            passed: result.passed.into_iter().map(Into::into).collect(),
            skipped_count: result.skipped_count,
        }
    }
}

#[cfg_attr(feature = "node", napi(object))]
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTokensJs {
    pub background: String,
    pub text: String,
    pub accent: String,
}

impl From<ThemeTokens> for ThemeTokensJs {
    fn from(tokens: ThemeTokens) -> Self {
        Self {
            background: tokens.background.to_string(),
            text: tokens.text.to_string(),
            accent: tokens.accent.to_string(),
        }
    }
}
