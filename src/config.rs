use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::{palette::MAX_STEPS, search::MAX_ITERATIONS, PaletteOptions, SearchOptions};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engine tuning knobs. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub target_ratio: f64,
    pub max_iterations: u32,
    pub lightness_step: f64,
    pub palette_steps: u32,
    pub palette_lightest: f64,
    pub palette_darkest: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let search = SearchOptions::default();
        let palette = PaletteOptions::default();
        Self {
            target_ratio: search.target_ratio,
            max_iterations: search.max_iterations,
            lightness_step: search.step,
            palette_steps: palette.steps,
            palette_lightest: palette.lightest,
            palette_darkest: palette.darkest,
        }
    }
}

fn sanitize_f64(field: &'static str, value: f64, fallback: f64, min: f64, max: f64) -> f64 {
    let fixed = if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    };
    // Bitwise compare so NaN inputs always count as changed.
    if fixed.to_bits() != value.to_bits() {
        tracing::warn!(field, value, fixed, "engine config value out of range");
    }
    fixed
}

fn sanitize_u32(field: &'static str, value: u32, max: u32) -> u32 {
    let fixed = value.min(max);
    if fixed != value {
        tracing::warn!(field, value, fixed, "engine config value out of range");
    }
    fixed
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Every field clamped into a usable range; non-finite values reset to defaults.
    /// Counts are capped at [`MAX_ITERATIONS`] and [`MAX_STEPS`].
    pub fn sanitized(self) -> Self {
        let defaults = EngineConfig::default();
        let mut lightest = sanitize_f64(
            "paletteLightest",
            self.palette_lightest,
            defaults.palette_lightest,
            0.0,
            100.0,
        );
        let mut darkest = sanitize_f64(
            "paletteDarkest",
            self.palette_darkest,
            defaults.palette_darkest,
            0.0,
            100.0,
        );
        if lightest < darkest {
            tracing::warn!(lightest, darkest, "palette bounds swapped");
            std::mem::swap(&mut lightest, &mut darkest);
        }

        Self {
            target_ratio: sanitize_f64(
                "targetRatio",
                self.target_ratio,
                defaults.target_ratio,
                1.0,
                21.0,
            ),
            max_iterations: sanitize_u32("maxIterations", self.max_iterations, MAX_ITERATIONS),
            lightness_step: sanitize_f64(
                "lightnessStep",
                self.lightness_step,
                defaults.lightness_step,
                0.01,
                100.0,
            ),
            // 0 and 1 stay valid: empty palette and single clamped seed.
            palette_steps: sanitize_u32("paletteSteps", self.palette_steps, MAX_STEPS),
            palette_lightest: lightest,
            palette_darkest: darkest,
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            target_ratio: self.target_ratio,
            max_iterations: self.max_iterations,
            step: self.lightness_step,
        }
    }

    pub fn palette_options(&self) -> PaletteOptions {
        PaletteOptions {
            steps: self.palette_steps,
            lightest: self.palette_lightest,
            darkest: self.palette_darkest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = EngineConfig::default();
        assert_eq!(config.target_ratio, 4.5);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.lightness_step, 2.0);
        assert_eq!(config.palette_steps, 9);
        assert_eq!(config.palette_lightest, 95.0);
        assert_eq!(config.palette_darkest, 5.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{"targetRatio": 7.0, "paletteSteps": 11}"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.target_ratio, 7.0);
        assert_eq!(config.palette_steps, 11);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.search_options().target_ratio, 7.0);
        assert_eq!(config.palette_options().steps, 11);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(
            EngineConfig::from_json("{}").unwrap(),
            EngineConfig::default()
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = EngineConfig::from_json(r#"{"targetRatio": "high"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid engine config"));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let json = r#"{"targetRatio": 50, "lightnessStep": -3,
            "paletteLightest": 10, "paletteDarkest": 120}"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.target_ratio, 21.0);
        assert!(config.lightness_step > 0.0);
        assert_eq!(config.palette_lightest, 100.0);
        assert_eq!(config.palette_darkest, 10.0);
    }

    #[test]
    fn oversized_counts_are_capped() {
        let json = r#"{"paletteSteps": 4294967295, "maxIterations": 4294967295}"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.palette_steps, MAX_STEPS);
        assert_eq!(config.max_iterations, MAX_ITERATIONS);
        assert_eq!(config.palette_options().steps, 256);
        assert_eq!(config.search_options().max_iterations, 10_000);
    }

    #[test]
    fn small_palette_counts_survive() {
        for steps in [0, 1, 2] {
            let config = EngineConfig {
                palette_steps: steps,
                max_iterations: 0,
                ..EngineConfig::default()
            }
            .sanitized();
            assert_eq!(config.palette_steps, steps);
            assert_eq!(config.max_iterations, 0);
        }
    }

    #[test]
    fn non_finite_values_reset() {
        let config = EngineConfig {
            target_ratio: f64::NAN,
            lightness_step: f64::INFINITY,
            ..EngineConfig::default()
        }
        .sanitized();
        assert_eq!(config.target_ratio, 4.5);
        assert_eq!(config.lightness_step, 2.0);
    }
}
