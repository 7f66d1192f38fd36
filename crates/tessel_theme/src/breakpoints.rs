//! Breakpoints
//!
//! Named viewport-width thresholds and the media query helpers built on them.
//!
//! ```
//! use tessel_theme::{Breakpoint, Breakpoints};
//!
//! let bp = Breakpoints::default();
//! assert_eq!(bp.up(Breakpoint::Sm).to_string(), "@media (min-width:600px)");
//! assert!(bp.down(Breakpoint::Sm).matches(599.0));
//! assert!(!bp.down(Breakpoint::Sm).matches(600.0));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tessel_style::MediaQuery;

use crate::error::{Result, ThemeError};

/// Named breakpoint, smallest to largest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    /// Extra small (phones)
    Xs,
    /// Small (large phones, small tablets)
    Sm,
    /// Medium (tablets)
    Md,
    /// Large (desktops)
    Lg,
    /// Extra large
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Short name used in theme files
    pub fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// The next larger breakpoint
    pub fn next(self) -> Option<Breakpoint> {
        match self {
            Breakpoint::Xs => Some(Breakpoint::Sm),
            Breakpoint::Sm => Some(Breakpoint::Md),
            Breakpoint::Md => Some(Breakpoint::Lg),
            Breakpoint::Lg => Some(Breakpoint::Xl),
            Breakpoint::Xl => None,
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| ThemeError::UnknownBreakpoint(s.to_string()))
    }
}

/// Breakpoint thresholds in px
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub xs: f64,
    pub sm: f64,
    pub md: f64,
    pub lg: f64,
    pub xl: f64,
    /// Gap subtracted from exclusive upper bounds (`step / 100` px)
    pub step: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            xs: 0.0,
            sm: 600.0,
            md: 960.0,
            lg: 1280.0,
            xl: 1920.0,
            step: 5.0,
        }
    }
}

impl Breakpoints {
    /// Threshold for a breakpoint
    pub fn value(&self, bp: Breakpoint) -> f64 {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    fn below(&self, bp: Breakpoint) -> f64 {
        self.value(bp) - self.step / 100.0
    }

    /// Widths at or above `bp`
    pub fn up(&self, bp: Breakpoint) -> MediaQuery {
        MediaQuery::min_width(self.value(bp))
    }

    /// Widths strictly below `bp`
    pub fn down(&self, bp: Breakpoint) -> MediaQuery {
        MediaQuery::max_width(self.below(bp))
    }

    /// Widths from `start` up to (excluding) `end`
    pub fn between(&self, start: Breakpoint, end: Breakpoint) -> MediaQuery {
        MediaQuery::range(self.value(start), self.below(end))
    }

    /// Widths inside the `bp` band only
    pub fn only(&self, bp: Breakpoint) -> MediaQuery {
        match bp.next() {
            Some(next) => self.between(bp, next),
            None => self.up(bp),
        }
    }

    /// `up` for a breakpoint given by name
    pub fn up_named(&self, name: &str) -> Result<MediaQuery> {
        Ok(self.up(name.parse()?))
    }

    /// Check that thresholds are strictly ascending
    pub fn validate(&self) -> Result<()> {
        for pair in Breakpoint::ALL.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if self.value(upper) <= self.value(lower) {
                return Err(ThemeError::BreakpointOrder {
                    lower,
                    lower_value: self.value(lower),
                    upper,
                    upper_value: self.value(upper),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up() {
        let bp = Breakpoints::default();
        assert_eq!(bp.up(Breakpoint::Md).to_string(), "@media (min-width:960px)");
        assert!(bp.up(Breakpoint::Sm).matches(600.0));
        assert!(!bp.up(Breakpoint::Sm).matches(599.0));
    }

    #[test]
    fn test_between_and_only() {
        let bp = Breakpoints::default();
        let sm = bp.only(Breakpoint::Sm);
        assert!(sm.matches(600.0));
        assert!(sm.matches(959.0));
        assert!(!sm.matches(960.0));

        // Largest breakpoint has no upper bound
        assert_eq!(bp.only(Breakpoint::Xl), bp.up(Breakpoint::Xl));
    }

    #[test]
    fn test_up_named() {
        let bp = Breakpoints::default();
        assert_eq!(bp.up_named("sm").unwrap(), bp.up(Breakpoint::Sm));
        assert!(matches!(
            bp.up_named("xxl"),
            Err(ThemeError::UnknownBreakpoint(name)) if name == "xxl"
        ));
    }

    #[test]
    fn test_validate() {
        assert!(Breakpoints::default().validate().is_ok());

        let broken = Breakpoints {
            md: 500.0,
            ..Default::default()
        };
        assert!(matches!(
            broken.validate(),
            Err(ThemeError::BreakpointOrder {
                lower: Breakpoint::Sm,
                upper: Breakpoint::Md,
                ..
            })
        ));
    }
}
