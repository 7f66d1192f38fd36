//! Width-based media queries
//!
//! A [`MediaQuery`] is the condition object produced by breakpoint helpers
//! such as `Breakpoints::up`. Its `Display` form is the key used inside a
//! [`StyleRule`](crate::StyleRule):
//!
//! ```
//! use tessel_style::MediaQuery;
//!
//! let query = MediaQuery::min_width(600.0);
//! assert_eq!(query.to_string(), "@media (min-width:600px)");
//! assert_eq!(MediaQuery::parse("@media (min-width:600px)"), Some(query));
//! ```

use std::fmt;

use crate::value::format_number;

const MEDIA_PREFIX: &str = "@media";

/// Viewport width condition with optional lower and upper bounds (in px)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MediaQuery {
    /// Inclusive lower bound
    pub min_width: Option<f64>,
    /// Inclusive upper bound
    pub max_width: Option<f64>,
}

impl MediaQuery {
    /// Query matching widths at or above `width`
    pub fn min_width(width: f64) -> Self {
        Self {
            min_width: Some(width),
            max_width: None,
        }
    }

    /// Query matching widths at or below `width`
    pub fn max_width(width: f64) -> Self {
        Self {
            min_width: None,
            max_width: Some(width),
        }
    }

    /// Query matching widths within `[min, max]`
    pub fn range(min: f64, max: f64) -> Self {
        Self {
            min_width: Some(min),
            max_width: Some(max),
        }
    }

    /// Evaluate the query against a viewport width
    pub fn matches(&self, viewport_width: f64) -> bool {
        self.min_width.map_or(true, |min| viewport_width >= min)
            && self.max_width.map_or(true, |max| viewport_width <= max)
    }

    /// Check if a rule key is a media block
    pub fn is_media_key(key: &str) -> bool {
        key.starts_with(MEDIA_PREFIX)
    }

    /// Parse a key previously produced by `Display`
    ///
    /// Only `min-width`/`max-width` conditions in `px` joined by `and` are
    /// understood; anything else yields `None`.
    pub fn parse(key: &str) -> Option<Self> {
        let body = key.strip_prefix(MEDIA_PREFIX)?.trim();
        if body.is_empty() {
            return None;
        }

        let mut query = MediaQuery::default();
        for condition in body.split(" and ") {
            let inner = condition.trim().strip_prefix('(')?.strip_suffix(')')?;
            let (feature, value) = inner.split_once(':')?;
            let px: f64 = value.trim().strip_suffix("px")?.parse().ok()?;
            match feature.trim() {
                "min-width" => query.min_width = Some(px),
                "max-width" => query.max_width = Some(px),
                _ => return None,
            }
        }

        if query.min_width.is_none() && query.max_width.is_none() {
            return None;
        }
        Some(query)
    }
}

impl fmt::Display for MediaQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MEDIA_PREFIX)?;
        match (self.min_width, self.max_width) {
            (Some(min), Some(max)) => write!(
                f,
                " (min-width:{}px) and (max-width:{}px)",
                format_number(min),
                format_number(max)
            ),
            (Some(min), None) => write!(f, " (min-width:{}px)", format_number(min)),
            (None, Some(max)) => write!(f, " (max-width:{}px)", format_number(max)),
            // An unbounded query matches everything
            (None, None) => f.write_str(" all"),
        }
    }
}

impl From<MediaQuery> for String {
    fn from(query: MediaQuery) -> Self {
        query.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            MediaQuery::max_width(959.5).to_string(),
            "@media (max-width:959.5px)"
        );
        assert_eq!(
            MediaQuery::range(600.0, 959.0).to_string(),
            "@media (min-width:600px) and (max-width:959px)"
        );
    }

    #[test]
    fn test_parse_roundtrip_range() {
        let query = MediaQuery::range(600.0, 959.95);
        assert_eq!(MediaQuery::parse(&query.to_string()), Some(query));
    }

    #[test]
    fn test_parse_rejects_other_keys() {
        assert_eq!(MediaQuery::parse("minHeight"), None);
        assert_eq!(MediaQuery::parse("&.selected"), None);
        assert_eq!(MediaQuery::parse("@media print"), None);
        assert_eq!(MediaQuery::parse("@media (orientation:landscape)"), None);
    }

    #[test]
    fn test_matches() {
        let up = MediaQuery::min_width(600.0);
        assert!(up.matches(600.0));
        assert!(up.matches(1024.0));
        assert!(!up.matches(599.0));

        let between = MediaQuery::range(600.0, 959.95);
        assert!(between.matches(800.0));
        assert!(!between.matches(960.0));
    }
}
