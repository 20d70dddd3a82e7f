use super::color::{Hsl, Rgb};

/// RGB -> HSL. Achromatic colors (max == min) get hue and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h * 60.0, s * 100.0, l * 100.0)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// HSL -> RGB, channels rounded to the nearest integer.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    // Re-normalize: fields are public and may have been set directly.
    let hsl = Hsl::new(hsl.h, hsl.s, hsl.l);
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::from_f64(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::from_f64(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// Shift HSL lightness by `delta` percentage points (clamped to 0-100).
pub fn adjust_lightness(rgb: Rgb, delta: f64) -> Rgb {
    let hsl = rgb_to_hsl(rgb);
    hsl_to_rgb(hsl.with_lightness(hsl.l + delta))
}
