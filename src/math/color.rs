use std::fmt;

use serde::{Deserialize, Serialize};

/// Replace NaN/infinite values with `fallback` so they never reach downstream arithmetic.
#[inline]
pub(crate) fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// 8-bit sRGB color. Channels are always within 0-255 by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers, clamping each channel to 0-255.
    pub fn clamped(r: i64, g: i64, b: i64) -> Self {
        let c = |v: i64| v.clamp(0, 255) as u8;
        Self::new(c(r), c(g), c(b))
    }

    /// Build from 0-255 floats: rounded, clamped, NaN -> 0.
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        let c = |v: f64| finite_or(v, 0.0).round().clamp(0.0, 255.0) as u8;
        Self::new(c(r), c(g), c(b))
    }

    /// Channels normalized to 0.0-1.0.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Normalizing constructor: hue wraps around, s/l clamp, non-finite -> 0.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        let mut h = finite_or(h, 0.0).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        if h >= 360.0 {
            h = 0.0;
        }
        Self {
            h,
            s: finite_or(s, 0.0).clamp(0.0, 100.0),
            l: finite_or(l, 0.0).clamp(0.0, 100.0),
        }
    }

    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }
}

/// CIE 1931 XYZ, scaled so the reference white has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Components are non-negative; negative or non-finite input becomes 0.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let c = |v: f64| finite_or(v, 0.0).max(0.0);
        Self {
            x: c(x),
            y: c(y),
            z: c(z),
        }
    }
}

/// CIE-LAB. `l` is in [0, 100]; `a` and `b` are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l: finite_or(l, 0.0).clamp(0.0, 100.0),
            a: finite_or(a, 0.0),
            b: finite_or(b, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_rgb_channels() {
        assert_eq!(Rgb::clamped(300, -5, 128), Rgb::new(255, 0, 128));
    }

    #[test]
    fn float_rgb_rounds_and_drops_nan() {
        assert_eq!(Rgb::from_f64(127.5, f64::NAN, 999.0), Rgb::new(128, 0, 255));
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xF2, 0xA3, 0x0F).to_string(), "#f2a30f");
    }

    #[test]
    fn hsl_wraps_hue_and_clamps() {
        let hsl = Hsl::new(-30.0, 150.0, -2.0);
        assert!((hsl.h - 330.0).abs() < 1e-9);
        assert_eq!(hsl.s, 100.0);
        assert_eq!(hsl.l, 0.0);

        assert_eq!(Hsl::new(720.0, 50.0, 50.0).h, 0.0);
        assert_eq!(
            Hsl::new(f64::NAN, f64::INFINITY, 40.0),
            Hsl::new(0.0, 0.0, 40.0)
        );
    }

    #[test]
    fn xyz_and_lab_sanitize() {
        assert_eq!(Xyz::new(-1.0, f64::NAN, 3.0), Xyz::new(0.0, 0.0, 3.0));
        let lab = Lab::new(120.0, f64::NAN, -200.0);
        assert_eq!(lab.l, 100.0);
        assert_eq!(lab.a, 0.0);
        assert_eq!(lab.b, -200.0);
    }
}
