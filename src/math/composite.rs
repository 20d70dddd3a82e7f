use super::color::{finite_or, Rgb};

/// Alpha-composite a foreground color over a background color.
/// formula per channel: result = fg * alpha + bg * (1 - alpha)
/// Alpha is clamped to 0.0-1.0; NaN counts as opaque.
pub fn composite_over(fg: Rgb, bg: Rgb, alpha: f64) -> Rgb {
    let alpha = finite_or(alpha, 1.0).clamp(0.0, 1.0);
    let blend = |f: u8, b: u8| f64::from(f) * alpha + f64::from(b) * (1.0 - alpha);
    Rgb::from_f64(blend(fg.r, bg.r), blend(fg.g, bg.g), blend(fg.b, bg.b))
}

/// CSS `rgba(r, g, b, a)` string; alpha clamped and trimmed to 3 decimals.
pub fn to_rgba_string(rgb: Rgb, alpha: f64) -> String {
    let alpha = finite_or(alpha, 1.0).clamp(0.0, 1.0);
    let alpha = (alpha * 1000.0).round() / 1000.0;
    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha)
}
