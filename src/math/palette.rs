use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::hex::{hex_to_rgb, rgb_to_hex};
use super::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::brand::Shade;
use crate::error::Result;

/// Largest palette the generator will produce.
pub const MAX_STEPS: u32 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteOptions {
    pub steps: u32,
    /// Lightness (%) of the first entry.
    pub lightest: f64,
    /// Lightness (%) of the last entry.
    pub darkest: f64,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            steps: 9,
            lightest: 95.0,
            darkest: 5.0,
        }
    }
}

impl PaletteOptions {
    pub fn with_steps(self, steps: u32) -> Self {
        Self { steps, ..self }
    }

    /// Bounds clamped to [0, 100] and ordered lightest >= darkest.
    fn bounds(&self) -> (f64, f64) {
        let defaults = PaletteOptions::default();
        let clamp = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.clamp(0.0, 100.0)
            } else {
                fallback
            }
        };
        let a = clamp(self.lightest, defaults.lightest);
        let b = clamp(self.darkest, defaults.darkest);
        (a.max(b), a.min(b))
    }

    /// Lightness for entry `index`: a linear ramp from `lightest` to `darkest`.
    pub fn lightness_at(&self, index: u32, seed_lightness: f64) -> f64 {
        let (lightest, darkest) = self.bounds();
        let steps = self.capped_steps();
        if steps <= 1 {
            return seed_lightness.clamp(darkest, lightest);
        }
        let span = lightest - darkest;
        lightest - f64::from(index) * (span / f64::from(steps - 1))
    }

    fn capped_steps(&self) -> u32 {
        self.steps.min(MAX_STEPS)
    }
}

/// Tonal scale ordered lightest to darkest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn into_colors(self) -> Vec<String> {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Midpoint entry, the "500" of a 9-step scale.
    pub fn anchor_index(&self) -> usize {
        self.colors.len().saturating_sub(1) / 2
    }

    /// Entry by shade label. Only 9-step palettes carry shade labels.
    pub fn shade(&self, shade: Shade) -> Option<&str> {
        if self.colors.len() != Shade::ALL.len() {
            return None;
        }
        self.colors.get(shade.index()).map(String::as_str)
    }
}

/// Generate a tonal palette from `seed`, holding its hue and saturation.
pub fn generate_palette(seed: Rgb, options: &PaletteOptions) -> Palette {
    let steps = options.capped_steps();
    if steps != options.steps {
        tracing::warn!(requested = options.steps, steps, "palette size capped");
    }
    let base = rgb_to_hsl(seed);
    let colors = (0..steps)
        .map(|i| {
            let lightness = options.lightness_at(i, base.l);
            rgb_to_hex(hsl_to_rgb(base.with_lightness(lightness)))
        })
        .collect();
    tracing::trace!(seed = %seed, steps, "palette generated");
    Palette { colors }
}

pub fn generate_palette_hex(seed: &str, options: &PaletteOptions) -> Result<Palette> {
    Ok(generate_palette(hex_to_rgb(seed)?, options))
}
