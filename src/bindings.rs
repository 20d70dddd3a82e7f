//! NAPI surface. Thin wrappers: parse, delegate to `math`, convert records.

use napi::Result;

use crate::brand::Theme;
use crate::config::EngineConfig;
use crate::engine::check_pairs_parallel;
use crate::math::{self, checker::Conformance, palette, search, wcag};
use crate::types::{
    contrast_result, AccessibleColor, CheckResultJs, ColorPairJs, HslObject, LabObject, RgbObject,
    ThemeTokensJs, XyzObject,
};

fn invalid_arg(message: impl Into<String>) -> napi::Error {
    napi::Error::new(napi::Status::InvalidArg, message.into())
}

fn load_config(config_json: Option<String>) -> Result<EngineConfig> {
    match config_json {
        Some(json) => EngineConfig::from_json(&json).map_err(|e| invalid_arg(e.to_string())),
        None => Ok(EngineConfig::default()),
    }
}

#[napi]
pub fn health_check() -> String {
    "color-a11y-native ok".to_string()
}

/// Install a stderr log subscriber. `filter` uses `RUST_LOG` syntax.
#[napi]
pub fn enable_logging(filter: Option<String>) -> bool {
    crate::logging::init_logging(filter.as_deref())
}

#[napi]
pub fn hex_to_rgb(hex: String) -> Result<RgbObject> {
    Ok(math::hex_to_rgb(&hex)?.into())
}

#[napi]
pub fn rgb_to_hex(rgb: RgbObject) -> String {
    math::rgb_to_hex(rgb.into())
}

#[napi]
pub fn rgb_to_hsl(rgb: RgbObject) -> HslObject {
    math::rgb_to_hsl(rgb.into()).into()
}

#[napi]
pub fn hsl_to_rgb(hsl: HslObject) -> RgbObject {
    math::hsl_to_rgb(hsl.into()).into()
}

#[napi]
pub fn rgb_to_xyz(rgb: RgbObject) -> XyzObject {
    math::rgb_to_xyz(rgb.into()).into()
}

#[napi]
pub fn xyz_to_lab(xyz: XyzObject) -> LabObject {
    math::xyz_to_lab(xyz.into()).into()
}

#[napi]
pub fn luminance(hex: String) -> Result<f64> {
    Ok(math::luminance(math::hex_to_rgb(&hex)?))
}

#[napi]
pub fn contrast_ratio(a: String, b: String) -> Result<f64> {
    let (a, b) = (math::hex_to_rgb(&a)?, math::hex_to_rgb(&b)?);
    Ok(math::contrast_ratio(a, b))
}

/// `{ ratio, wcagAA, wcagAAA, level }`. Never throws: malformed input reports
/// ratio 0 / level "fail".
#[napi(ts_return_type = "{ ratio: number; wcagAA: boolean; wcagAAA: boolean; level: string }")]
pub fn test_contrast(foreground: String, background: String) -> serde_json::Value {
    contrast_result(wcag::test_contrast(&foreground, &background))
}

#[napi(ts_return_type = "{ ratio: number; wcagAA: boolean; wcagAAA: boolean; level: string }")]
pub fn test_contrast_large(foreground: String, background: String) -> serde_json::Value {
    contrast_result(wcag::test_contrast_large(&foreground, &background))
}

#[napi]
pub fn find_accessible_color(
    target: String,
    background: String,
    target_ratio: Option<f64>,
    max_iterations: Option<u32>,
) -> Result<AccessibleColor> {
    let defaults = EngineConfig::default();
    let config = EngineConfig {
        target_ratio: target_ratio.unwrap_or(defaults.target_ratio),
        max_iterations: max_iterations.unwrap_or(defaults.max_iterations),
        ..defaults
    }
    .sanitized();
    let outcome = search::find_accessible_hex(&target, &background, &config.search_options())?;
    Ok(outcome.into())
}

#[napi]
pub fn generate_palette(seed: String, steps: Option<u32>) -> Result<Vec<String>> {
    let defaults = EngineConfig::default();
    let config = EngineConfig {
        palette_steps: steps.unwrap_or(defaults.palette_steps),
        ..defaults
    }
    .sanitized();
    let palette = palette::generate_palette_hex(&seed, &config.palette_options())?;
    Ok(palette.into_colors())
}

#[napi]
pub fn delta_e(a: String, b: String) -> Result<f64> {
    Ok(math::delta_e::delta_e_hex(&a, &b)?)
}

/// Any CSS color to `#rrggbb`.
#[napi]
pub fn parse_css_color(value: String) -> Result<String> {
    Ok(math::color_parse::parse_css_color(&value)?.to_string())
}

#[napi]
pub fn composite_over(foreground: String, background: String, alpha: f64) -> Result<String> {
    let fg = math::hex_to_rgb(&foreground)?;
    let bg = math::hex_to_rgb(&background)?;
    Ok(math::composite::composite_over(fg, bg, alpha).to_string())
}

#[napi]
pub fn to_rgba_string(hex: String, alpha: f64) -> Result<String> {
    let rgb = math::hex_to_rgb(&hex)?;
    Ok(math::composite::to_rgba_string(rgb, alpha))
}

/// Audit pairs in parallel. `level` is "AA" (default) or "AAA";
/// `config_json` is an optional serialized `EngineConfig`.
#[napi]
pub fn check_pairs(
    pairs: Vec<ColorPairJs>,
    level: Option<String>,
    config_json: Option<String>,
) -> Result<CheckResultJs> {
    let level = match level.as_deref().map(str::to_ascii_uppercase).as_deref() {
        None | Some("AA") => Conformance::AA,
        Some("AAA") => Conformance::AAA,
        Some(other) => return Err(invalid_arg(format!("unknown conformance level {other:?}"))),
    };
    let config = load_config(config_json)?;
    let pairs: Vec<_> = pairs.into_iter().map(Into::into).collect();
    let result = check_pairs_parallel(&pairs, level, &config.search_options());
    Ok(result.into())
}

#[napi]
pub fn theme_tokens(theme: String, high_contrast: bool) -> Result<ThemeTokensJs> {
    let theme = match theme.to_ascii_lowercase().as_str() {
        "light" => Theme::Light,
        "dark" => Theme::Dark,
        other => return Err(invalid_arg(format!("unknown theme {other:?}"))),
    };
    Ok(theme.tokens(high_contrast).into())
}
