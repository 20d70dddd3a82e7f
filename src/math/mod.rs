pub mod checker;
pub mod color;
pub mod color_parse;
pub mod composite;
pub mod delta_e;
pub mod hex;
pub mod hsl;
pub mod lab;
pub mod palette;
pub mod search;
pub mod wcag;

pub use color::{Hsl, Lab, Rgb, Xyz};
pub use delta_e::delta_e;
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use lab::{rgb_to_xyz, xyz_to_lab};
pub use palette::{generate_palette, Palette, PaletteOptions};
pub use search::{find_accessible_color, SearchOptions, SearchOutcome};
pub use wcag::{
    contrast_ratio, luminance, test_contrast, ComplianceLevel, ContrastReport, TextSize,
};
