//! Nearest-compliant color search.
//!
//! Walks HSL lightness away from the background in fixed steps until the
//! foreground meets the target ratio. The walk direction is picked once from
//! the background luminance: light backgrounds darken the foreground, dark
//! backgrounds lighten it.

use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::hex::{hex_to_rgb, rgb_to_hex};
use super::hsl::{hsl_to_rgb, rgb_to_hsl};
use super::wcag::{contrast_ratio, luminance};
use crate::error::Result;

/// Hard cap on search iterations. At the smallest configurable step (0.01)
/// this still sweeps the whole lightness range.
pub const MAX_ITERATIONS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub target_ratio: f64,
    pub max_iterations: u32,
    /// Lightness change per iteration, in percentage points.
    pub step: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            target_ratio: 4.5,
            max_iterations: 50,
            step: 2.0,
        }
    }
}

impl SearchOptions {
    pub fn with_target_ratio(self, target_ratio: f64) -> Self {
        Self {
            target_ratio,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Darken,
    Lighten,
}

impl Direction {
    /// Background luminance above 0.5 counts as light.
    pub fn for_background(background: Rgb) -> Self {
        if luminance(background) > 0.5 {
            Direction::Darken
        } else {
            Direction::Lighten
        }
    }

    fn sign(self) -> f64 {
        match self {
            Direction::Darken => -1.0,
            Direction::Lighten => 1.0,
        }
    }
}

/// Result of a search. `iterations` is 0 when the input already complied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<C = Rgb> {
    Converged { color: C, iterations: u32 },
    /// Budget exhausted (or lightness saturated) before reaching the ratio.
    BestEffort { color: C, iterations: u32 },
}

impl<C> SearchOutcome<C> {
    pub fn color(&self) -> &C {
        match self {
            SearchOutcome::Converged { color, .. } | SearchOutcome::BestEffort { color, .. } => {
                color
            }
        }
    }

    pub fn into_color(self) -> C {
        match self {
            SearchOutcome::Converged { color, .. } | SearchOutcome::BestEffort { color, .. } => {
                color
            }
        }
    }

    pub fn iterations(&self) -> u32 {
        match self {
            SearchOutcome::Converged { iterations, .. }
            | SearchOutcome::BestEffort { iterations, .. } => *iterations,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, SearchOutcome::Converged { .. })
    }

    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> SearchOutcome<D> {
        match self {
            SearchOutcome::Converged { color, iterations } => SearchOutcome::Converged {
                color: f(color),
                iterations,
            },
            SearchOutcome::BestEffort { color, iterations } => SearchOutcome::BestEffort {
                color: f(color),
                iterations,
            },
        }
    }
}

/// Find the nearest lightness variant of `target` meeting `options.target_ratio`
/// against `background`. Deterministic; bounded by `options.max_iterations`
/// (at most [`MAX_ITERATIONS`]).
pub fn find_accessible_color(
    target: Rgb,
    background: Rgb,
    options: &SearchOptions,
) -> SearchOutcome {
    if contrast_ratio(target, background) >= options.target_ratio {
        return SearchOutcome::Converged {
            color: target,
            iterations: 0,
        };
    }

    let direction = Direction::for_background(background);
    let base = rgb_to_hsl(target);
    let step = if options.step.is_finite() && options.step > 0.0 {
        options.step
    } else {
        SearchOptions::default().step
    };

    let mut candidate = target;
    let mut iterations = 0;
    for i in 1..=options.max_iterations.min(MAX_ITERATIONS) {
        iterations = i;
        let lightness = base.l + direction.sign() * step * f64::from(i);
        let hsl = base.with_lightness(lightness);
        candidate = hsl_to_rgb(hsl);

        if contrast_ratio(candidate, background) >= options.target_ratio {
            tracing::debug!(
                foreground = %target,
                background = %background,
                result = %candidate,
                iterations,
                "accessible color found"
            );
            return SearchOutcome::Converged {
                color: candidate,
                iterations,
            };
        }

        // Pinned at 0% or 100%: later iterations would produce the same color.
        if hsl.l <= 0.0 || hsl.l >= 100.0 {
            break;
        }
    }

    tracing::warn!(
        foreground = %target,
        background = %background,
        result = %candidate,
        iterations,
        target_ratio = options.target_ratio,
        "accessible color search did not reach target ratio"
    );
    SearchOutcome::BestEffort {
        color: candidate,
        iterations,
    }
}

/// Hex-level search. The no-op fast path returns `target` verbatim; adjusted
/// colors come back as `#rrggbb`.
pub fn find_accessible_hex(
    target: &str,
    background: &str,
    options: &SearchOptions,
) -> Result<SearchOutcome<String>> {
    let fg = hex_to_rgb(target)?;
    let bg = hex_to_rgb(background)?;
    let outcome = find_accessible_color(fg, bg, options);
    if outcome.iterations() == 0 && outcome.is_converged() {
        return Ok(outcome.map(|_| target.to_string()));
    }
    Ok(outcome.map(rgb_to_hex))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorError;
    use proptest::prelude::*;

    fn rgb(hex: &str) -> Rgb {
        hex_to_rgb(hex).unwrap()
    }

    #[test]
    fn yellow_on_white_converges() {
        let white = Rgb::WHITE;
        let outcome = find_accessible_color(rgb("#FFFF00"), white, &SearchOptions::default());
        assert!(outcome.is_converged(), "{outcome:?}");
        assert!(contrast_ratio(*outcome.color(), white) >= 4.5);
        // Yellow needs roughly 26 points of darkening at 2 points per step.
        assert!(outcome.iterations() > 10 && outcome.iterations() < 20);
    }

    #[test]
    fn result_is_the_first_compliant_step() {
        let target = rgb("#FFFF00");
        let outcome = find_accessible_color(target, Rgb::WHITE, &SearchOptions::default());
        let n = outcome.iterations();
        let base = rgb_to_hsl(target);
        let previous = hsl_to_rgb(base.with_lightness(base.l - 2.0 * f64::from(n - 1)));
        assert!(contrast_ratio(previous, Rgb::WHITE) < 4.5);
    }

    #[test]
    fn orange_on_white_darkens_and_keeps_hue() {
        let orange = rgb("#F2A30F");
        let outcome = find_accessible_color(orange, Rgb::WHITE, &SearchOptions::default());
        let found = *outcome.color();
        assert!(outcome.is_converged());
        assert!(contrast_ratio(found, Rgb::WHITE) >= 4.5);
        assert!(rgb_to_hsl(found).l < rgb_to_hsl(orange).l);
        assert!((rgb_to_hsl(found).h - rgb_to_hsl(orange).h).abs() < 2.0);
    }

    #[test]
    fn dark_background_lightens() {
        let bg = rgb("#212121");
        let fg = rgb("#333333");
        assert_eq!(Direction::for_background(bg), Direction::Lighten);
        let outcome = find_accessible_color(fg, bg, &SearchOptions::default());
        assert!(outcome.is_converged());
        assert!(rgb_to_hsl(*outcome.color()).l > rgb_to_hsl(fg).l);
        assert!(contrast_ratio(*outcome.color(), bg) >= 4.5);
    }

    #[test]
    fn compliant_input_is_returned_unchanged() {
        let outcome = find_accessible_hex("#000000", "#FFFFFF", &SearchOptions::default()).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Converged {
                color: "#000000".to_string(),
                iterations: 0
            }
        );
        // Verbatim, not normalized.
        let outcome = find_accessible_hex("#A85C00", "#FFF", &SearchOptions::default()).unwrap();
        assert_eq!(outcome.color(), "#A85C00");
    }

    #[test]
    fn impossible_target_is_best_effort() {
        // Mid grey can't reach 21:1 against anything but its extreme.
        let options = SearchOptions::default().with_target_ratio(21.0);
        let outcome = find_accessible_color(rgb("#777777"), rgb("#888888"), &options);
        assert!(!outcome.is_converged());
        assert!(outcome.iterations() <= options.max_iterations);
    }

    #[test]
    fn saturated_lightness_stops_early() {
        // Grey background is dark (luminance < 0.5), so the walk lightens to white
        // and then stops instead of spending the whole budget.
        let options = SearchOptions {
            target_ratio: 15.0,
            max_iterations: 500,
            step: 2.0,
        };
        let outcome = find_accessible_color(rgb("#808080"), rgb("#777777"), &options);
        assert!(!outcome.is_converged());
        assert_eq!(*outcome.color(), Rgb::WHITE);
        assert!(outcome.iterations() < 500);
    }

    #[test]
    fn huge_budget_is_capped() {
        let options = SearchOptions {
            target_ratio: 21.0,
            max_iterations: u32::MAX,
            step: 1e-9,
        };
        let outcome = find_accessible_color(rgb("#777777"), rgb("#888888"), &options);
        assert!(!outcome.is_converged());
        assert_eq!(outcome.iterations(), MAX_ITERATIONS);
    }

    #[test]
    fn zero_budget_returns_target() {
        let options = SearchOptions {
            max_iterations: 0,
            ..SearchOptions::default()
        };
        let outcome = find_accessible_color(rgb("#F2A30F"), Rgb::WHITE, &options);
        assert_eq!(
            outcome,
            SearchOutcome::BestEffort {
                color: rgb("#F2A30F"),
                iterations: 0
            }
        );
    }

    #[test]
    fn invalid_step_falls_back_to_default() {
        let options = SearchOptions {
            step: f64::NAN,
            ..SearchOptions::default()
        };
        let a = find_accessible_color(rgb("#FFFF00"), Rgb::WHITE, &options);
        let b = find_accessible_color(rgb("#FFFF00"), Rgb::WHITE, &SearchOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn malformed_hex_is_an_error() {
        let err = find_accessible_hex("nope", "#fff", &SearchOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            ColorError::InvalidLength { .. } | ColorError::InvalidDigit { .. }
        ));
    }

    proptest! {
        #[test]
        fn search_is_deterministic(fg in any::<[u8; 3]>(), bg in any::<[u8; 3]>()) {
            let fg = Rgb::new(fg[0], fg[1], fg[2]);
            let bg = Rgb::new(bg[0], bg[1], bg[2]);
            let options = SearchOptions::default();
            prop_assert_eq!(
                find_accessible_color(fg, bg, &options),
                find_accessible_color(fg, bg, &options)
            );
        }

        #[test]
        fn converged_results_comply(fg in any::<[u8; 3]>(), bg in any::<[u8; 3]>()) {
            let fg = Rgb::new(fg[0], fg[1], fg[2]);
            let bg = Rgb::new(bg[0], bg[1], bg[2]);
            let outcome = find_accessible_color(fg, bg, &SearchOptions::default());
            if outcome.is_converged() {
                prop_assert!(contrast_ratio(*outcome.color(), bg) >= 4.5);
            }
            prop_assert!(outcome.iterations() <= 50);
        }
    }
}
