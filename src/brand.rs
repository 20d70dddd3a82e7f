//! Brand color tables keyed by enums instead of string maps.

use serde::{Deserialize, Serialize};

use crate::math::Rgb;

/// Fixed brand colors shared with the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BrandToken {
    Orange500,
    /// Darkened orange that passes AA on white.
    OrangeAccessible,
    Grey900,
    Grey200,
}

impl BrandToken {
    pub const ALL: [BrandToken; 4] = [
        BrandToken::Orange500,
        BrandToken::OrangeAccessible,
        BrandToken::Grey900,
        BrandToken::Grey200,
    ];

    pub const fn rgb(self) -> Rgb {
        match self {
            BrandToken::Orange500 => Rgb::new(0xF2, 0xA3, 0x0F),
            BrandToken::OrangeAccessible => Rgb::new(0xA8, 0x5C, 0x00),
            BrandToken::Grey900 => Rgb::new(0x21, 0x21, 0x21),
            BrandToken::Grey200 => Rgb::new(0xEE, 0xEE, 0xEE),
        }
    }

    pub const fn hex(self) -> &'static str {
        match self {
            BrandToken::Orange500 => "#F2A30F",
            BrandToken::OrangeAccessible => "#A85C00",
            BrandToken::Grey900 => "#212121",
            BrandToken::Grey200 => "#EEEEEE",
        }
    }
}

/// Shade labels of a 9-step tonal scale, lightest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shade {
    #[serde(rename = "100")]
    S100,
    #[serde(rename = "200")]
    S200,
    #[serde(rename = "300")]
    S300,
    #[serde(rename = "400")]
    S400,
    #[serde(rename = "500")]
    S500,
    #[serde(rename = "600")]
    S600,
    #[serde(rename = "700")]
    S700,
    #[serde(rename = "800")]
    S800,
    #[serde(rename = "900")]
    S900,
}

impl Shade {
    pub const ALL: [Shade; 9] = [
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    pub const ANCHOR: Shade = Shade::S500;

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> u16 {
        (self as u16 + 1) * 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub background: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
}

impl Theme {
    pub fn tokens(self, high_contrast: bool) -> ThemeTokens {
        match (self, high_contrast) {
            (Theme::Light, false) => ThemeTokens {
                background: Rgb::WHITE,
                text: BrandToken::Grey900.rgb(),
                accent: BrandToken::Orange500.rgb(),
            },
            (Theme::Light, true) => ThemeTokens {
                background: Rgb::WHITE,
                text: BrandToken::Grey900.rgb(),
                accent: BrandToken::OrangeAccessible.rgb(),
            },
            (Theme::Dark, _) => ThemeTokens {
                background: BrandToken::Grey900.rgb(),
                text: BrandToken::Grey200.rgb(),
                accent: BrandToken::Orange500.rgb(),
            },
        }
    }
}
