use super::color::Rgb;
use crate::error::{ColorError, Result};

/// Parse a 3- or 6-digit hex string (optional `#`, case-insensitive) to RGB.
/// 3-digit shorthand expands by digit duplication: `f0a` -> `ff00aa`.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let trimmed = hex.trim();
    let raw = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if raw.is_empty() {
        return Err(ColorError::Empty);
    }
    // Checked before slicing so multi-byte input can't split a char boundary.
    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidDigit {
            input: hex.to_string(),
        });
    }

    let expanded: String = match raw.len() {
        3 => raw.chars().flat_map(|c| [c, c]).collect(),
        6 => raw.to_string(),
        len => {
            return Err(ColorError::InvalidLength {
                input: hex.to_string(),
                len,
            })
        }
    };

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&expanded[range], 16).map_err(|_| ColorError::InvalidDigit {
            input: hex.to_string(),
        })
    };
    Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Format RGB as `#rrggbb` (lowercase). Never fails.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Canonical `#rrggbb` form of a hex string.
pub fn normalize_hex(hex: &str) -> Result<String> {
    hex_to_rgb(hex).map(rgb_to_hex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_6digit_hex() {
        assert_eq!(hex_to_rgb("#ff0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(hex_to_rgb("#00ff00").unwrap(), Rgb::new(0, 255, 0));
        assert_eq!(hex_to_rgb("#1e293b").unwrap(), Rgb::new(30, 41, 59));
    }

    #[test]
    fn prefix_and_case_are_optional() {
        assert_eq!(hex_to_rgb("F2A30F").unwrap(), Rgb::new(242, 163, 15));
        assert_eq!(hex_to_rgb("#f2a30f").unwrap(), Rgb::new(242, 163, 15));
    }

    #[test]
    fn parse_3digit_expands() {
        assert_eq!(hex_to_rgb("F0A").unwrap(), Rgb::new(0xff, 0x00, 0xaa));
        assert_eq!(hex_to_rgb("#fff").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn malformed_is_an_error_not_black() {
        assert!(matches!(
            hex_to_rgb("not-a-color"),
            Err(ColorError::InvalidDigit { .. })
        ));
        assert!(matches!(
            hex_to_rgb("#xyz"),
            Err(ColorError::InvalidDigit { .. })
        ));
        assert!(matches!(
            hex_to_rgb("#ff000080"),
            Err(ColorError::InvalidLength { len: 8, .. })
        ));
        assert!(matches!(
            hex_to_rgb("#abcd"),
            Err(ColorError::InvalidLength { len: 4, .. })
        ));
        assert_eq!(hex_to_rgb("#"), Err(ColorError::Empty));
        assert_eq!(hex_to_rgb(""), Err(ColorError::Empty));
    }

    #[test]
    fn non_ascii_input_does_not_panic() {
        assert!(hex_to_rgb("#ffé0").is_err());
        assert!(hex_to_rgb("ééé").is_err());
    }

    #[test]
    fn format_is_lowercase_with_hash() {
        assert_eq!(rgb_to_hex(Rgb::new(242, 163, 15)), "#f2a30f");
        assert_eq!(rgb_to_hex(Rgb::clamped(512, -1, 16)), "#ff0010");
    }

    #[test]
    fn normalize_brand_colors() {
        assert_eq!(normalize_hex("#F2A30F").unwrap(), "#f2a30f");
        assert_eq!(normalize_hex("EEE").unwrap(), "#eeeeee");
    }

    proptest! {
        #[test]
        fn hex_round_trip(
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
            upper in any::<bool>(),
            hash in any::<bool>(),
        ) {
            let mut hex = format!("{:02x}{:02x}{:02x}", r, g, b);
            if upper {
                hex = hex.to_uppercase();
            }
            if hash {
                hex.insert(0, '#');
            }
            let rgb = hex_to_rgb(&hex).unwrap();
            prop_assert_eq!(rgb_to_hex(rgb), format!("#{:02x}{:02x}{:02x}", r, g, b));
        }
    }
}
