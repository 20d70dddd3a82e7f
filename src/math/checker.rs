use serde::{Deserialize, Serialize};

use super::hex::{hex_to_rgb, rgb_to_hex};
use super::search::{find_accessible_color, SearchOptions};
use super::wcag::{contrast_report, ContrastReport, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Conformance {
    #[default]
    #[serde(rename = "AA", alias = "aa")]
    AA,
    #[serde(rename = "AAA", alias = "aaa")]
    AAA,
}

impl Conformance {
    pub fn threshold(self, size: TextSize) -> f64 {
        match self {
            Conformance::AA => size.aa_threshold(),
            Conformance::AAA => size.aaa_threshold(),
        }
    }

    fn passes(self, report: &ContrastReport) -> bool {
        match self {
            Conformance::AA => report.wcag_aa,
            Conformance::AAA => report.wcag_aaa,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPair {
    #[serde(default)]
    pub label: Option<String>,
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub large_text: bool,
}

impl ColorPair {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            label: None,
            foreground: foreground.into(),
            background: background.into(),
            large_text: false,
        }
    }

    pub fn text_size(&self) -> TextSize {
        if self.large_text {
            TextSize::Large
        } else {
            TextSize::Normal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairCheck {
    pub pair: ColorPair,
    pub report: ContrastReport,
    /// Nearest compliant foreground; only set for violations.
    pub suggestion: Option<String>,
    /// Whether the suggestion actually meets the threshold.
    pub suggestion_converged: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub violations: Vec<PairCheck>,
    pub passed: Vec<PairCheck>,
    pub skipped_count: u32,
}

/// Check a single pair. `None` when either color fails to parse.
pub fn check_pair(
    pair: &ColorPair,
    level: Conformance,
    search: &SearchOptions,
) -> Option<PairCheck> {
    let fg = hex_to_rgb(&pair.foreground).ok()?;
    let bg = hex_to_rgb(&pair.background).ok()?;
    let size = pair.text_size();
    let report = contrast_report(fg, bg, size);

    let (suggestion, suggestion_converged) = if level.passes(&report) {
        (None, false)
    } else {
        let options = search.with_target_ratio(level.threshold(size));
        let outcome = find_accessible_color(fg, bg, &options);
        let converged = outcome.is_converged();
        (Some(rgb_to_hex(outcome.into_color())), converged)
    };

    Some(PairCheck {
        pair: pair.clone(),
        report,
        suggestion,
        suggestion_converged,
    })
}

/// Fold checked pairs (in input order) into violations/passed/skipped.
pub fn collect_checks(checks: impl IntoIterator<Item = Option<PairCheck>>) -> CheckResult {
    let mut result = CheckResult::default();
    for check in checks {
        match check {
            None => result.skipped_count += 1,
            Some(check) if check.suggestion.is_some() => result.violations.push(check),
            Some(check) => result.passed.push(check),
        }
    }
    result
}

/// Check all pairs against `level`. Pairs with malformed colors are skipped.
pub fn check_all_pairs(
    pairs: &[ColorPair],
    level: Conformance,
    search: &SearchOptions,
) -> CheckResult {
    collect_checks(pairs.iter().map(|pair| check_pair(pair, level, search)))
}
