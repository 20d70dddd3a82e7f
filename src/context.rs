use crate::brand::{Theme, ThemeTokens};
use crate::config::EngineConfig;
use crate::engine::check_pairs_parallel;
use crate::math::checker::{CheckResult, ColorPair, Conformance};
use crate::math::{find_accessible_color, generate_palette, Palette, Rgb, SearchOutcome};

/// Explicit engine handle: built once at startup and passed by reference
/// to whatever needs the configured engine or the active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorContext {
    config: EngineConfig,
    pub theme: Theme,
    pub high_contrast: bool,
}

impl Default for ColorContext {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ColorContext {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
            theme: Theme::default(),
            high_contrast: false,
        }
    }

    pub fn with_theme(self, theme: Theme, high_contrast: bool) -> Self {
        Self {
            theme,
            high_contrast,
            ..self
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tokens(&self) -> ThemeTokens {
        self.theme.tokens(self.high_contrast)
    }

    /// Nearest compliant variant of `target` on the theme background.
    pub fn accessible_on_background(&self, target: Rgb) -> SearchOutcome {
        self.find_accessible(target, self.tokens().background)
    }

    pub fn find_accessible(&self, target: Rgb, background: Rgb) -> SearchOutcome {
        find_accessible_color(target, background, &self.config.search_options())
    }

    pub fn palette(&self, seed: Rgb) -> Palette {
        generate_palette(seed, &self.config.palette_options())
    }

    pub fn audit(&self, pairs: &[ColorPair], level: Conformance) -> CheckResult {
        check_pairs_parallel(pairs, level, &self.config.search_options())
    }
}
