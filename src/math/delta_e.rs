//! CIE76 color difference.
//!
//! Rough reading of the magnitude:
//! - < 1.0: imperceptible
//! - 1.0-2.0: perceptible on close inspection
//! - > 10.0: clearly distinct colors
//!
//! No threshold is enforced here; callers interpret the value.

use super::color::{Lab, Rgb};
use super::hex::hex_to_rgb;
use super::lab::rgb_to_lab;
use crate::error::Result;

/// Euclidean distance in LAB space.
pub fn delta_e_lab(a: Lab, b: Lab) -> f64 {
    let dl = a.l - b.l;
    let da = a.a - b.a;
    let db = a.b - b.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// CIE76 Delta E between two sRGB colors (via XYZ -> LAB).
pub fn delta_e(a: Rgb, b: Rgb) -> f64 {
    delta_e_lab(rgb_to_lab(a), rgb_to_lab(b))
}

pub fn delta_e_hex(a: &str, b: &str) -> Result<f64> {
    Ok(delta_e(hex_to_rgb(a)?, hex_to_rgb(b)?))
}
