//! # Tessel Theme
//!
//! The theme provider for Tessel components. A [`Theme`] bundles the design
//! context every component reads while resolving styles:
//!
//! - **Typography**: a scale of named variants (`body1`, `body2`, ...)
//! - **Breakpoints**: named width thresholds and media query helpers
//! - **Palette / spacing**: row colors and the spacing unit
//! - **Components**: per-component default props and style overrides
//!
//! Themes are plain values, loaded from TOML and validated once at the theme
//! boundary. Misconfiguration surfaces here as a [`ThemeError`] instead of
//! being masked later during rendering.

pub mod breakpoints;
pub mod error;
pub mod palette;
pub mod state;
pub mod theme;
pub mod typography;

pub use breakpoints::{Breakpoint, Breakpoints};
pub use error::{Result, ThemeError};
pub use palette::Palette;
pub use state::ThemeState;
pub use theme::{ComponentTheme, DefaultProps, Theme};
pub use typography::{Typography, TypographyStyle, TypographyVariant, DEFAULT_FONT_FAMILY};
