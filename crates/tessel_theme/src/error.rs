//! Theme error types

use std::io;
use thiserror::Error;

use crate::breakpoints::Breakpoint;

/// Errors raised at the theme boundary (loading, validation, named lookups)
#[derive(Error, Debug)]
pub enum ThemeError {
    /// IO error when reading a theme file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Theme file is not valid TOML or misses required fields
    #[error("Theme parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Breakpoint name not in `xs`, `sm`, `md`, `lg`, `xl`
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),

    /// Typography variant name not defined by the scale
    #[error("Unknown typography variant: {0}")]
    UnknownTypographyVariant(String),

    /// Breakpoint thresholds are not strictly ascending
    #[error("Breakpoint {upper} ({upper_value}px) must be greater than {lower} ({lower_value}px)")]
    BreakpointOrder {
        lower: Breakpoint,
        lower_value: f64,
        upper: Breakpoint,
        upper_value: f64,
    },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
