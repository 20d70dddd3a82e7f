use csscolorparser::Color;

use super::color::Rgb;
use super::hex::hex_to_rgb;
use crate::error::{ColorError, Result};

/// Parse any CSS color value to opaque RGB.
/// Handles: hex (strict 3/6 digits), rgb(), hsl(), hwb(), oklch, named colors.
/// Keywords without a concrete color (transparent, inherit, currentColor, ...)
/// and unrecognized values are `ColorError::Unsupported`. Alpha is dropped.
pub fn parse_css_color(value: &str) -> Result<Rgb> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ColorError::Empty);
    }

    match trimmed.to_lowercase().as_str() {
        "transparent" | "inherit" | "currentcolor" | "initial" | "unset" => {
            return Err(ColorError::Unsupported {
                input: value.to_string(),
            })
        }
        _ => {}
    }

    // Hex goes through the strict parser so 4/8-digit forms stay errors.
    if trimmed.starts_with('#') {
        return hex_to_rgb(trimmed);
    }

    match trimmed.parse::<Color>() {
        Ok(color) => {
            let [r, g, b, _] = color.to_rgba8();
            Ok(Rgb::new(r, g, b))
        }
        Err(_) => Err(ColorError::Unsupported {
            input: value.to_string(),
        }),
    }
}
