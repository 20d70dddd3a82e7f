//! Color science and accessibility engine: hex/RGB/HSL/XYZ/LAB conversion,
//! WCAG luminance and contrast, accessible-color search, tonal palettes and
//! CIE76 Delta E. Everything is a pure function of its inputs.
//!
//! Build with `--features node` for the NAPI module consumed by the UI.

#[cfg(feature = "node")]
#[macro_use]
extern crate napi_derive;

#[cfg(feature = "node")]
pub mod bindings;
pub mod brand;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod logging;
pub mod math;
pub mod types;

pub use config::EngineConfig;
pub use context::ColorContext;
pub use error::{ColorError, Result};
