//! Style values
//!
//! A [`StyleValue`] is the right-hand side of a style declaration: a bare
//! number (`48`), a keyword or string (`"auto"`, `"1rem"`), or a nested
//! [`StyleRule`] used for selectors and media blocks.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::rule::StyleRule;

/// Value assigned to a style property
///
/// Whole numbers serialize as integers (`48`, not `48.0`).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (pixels unless the property is unitless)
    Number(f64),
    /// Keyword or string value (`auto`, `border-box`, `1rem`)
    Text(String),
    /// Nested rule (selector or `@media` block)
    Rule(StyleRule),
}

impl StyleValue {
    /// Numeric payload, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if this is a keyword or string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Nested rule, if this is a selector or media block
    pub fn as_rule(&self) -> Option<&StyleRule> {
        match self {
            StyleValue::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    /// Check if this value is a nested rule
    pub fn is_rule(&self) -> bool {
        matches!(self, StyleValue::Rule(_))
    }
}

/// Integer form of a whole number that fits losslessly
fn whole_number(n: f64) -> Option<i64> {
    (n.fract() == 0.0 && n.abs() < 1e15).then_some(n as i64)
}

/// Format a number without a trailing `.0` for whole values
pub(crate) fn format_number(n: f64) -> String {
    match whole_number(n) {
        Some(i) => i.to_string(),
        None => n.to_string(),
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number(n) => match whole_number(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            StyleValue::Text(s) => serializer.serialize_str(s),
            StyleValue::Rule(rule) => rule.serialize(serializer),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Rule(rule) => write!(f, "{{{} declarations}}", rule.len()),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<u16> for StyleValue {
    fn from(n: u16) -> Self {
        StyleValue::Number(f64::from(n))
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<StyleRule> for StyleValue {
    fn from(rule: StyleRule) -> Self {
        StyleValue::Rule(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_numbers() {
        assert_eq!(StyleValue::from(48).to_string(), "48");
        assert_eq!(StyleValue::from(1.5).to_string(), "1.5");
        assert_eq!(StyleValue::from("auto").to_string(), "auto");
    }

    #[test]
    fn test_whole_numbers_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&StyleValue::from(48)).unwrap(), "48");
        assert_eq!(serde_json::to_string(&StyleValue::from(400u16)).unwrap(), "400");
        assert_eq!(serde_json::to_string(&StyleValue::from(-1.0)).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&StyleValue::from(1.43)).unwrap(), "1.43");
        assert_eq!(serde_json::to_string(&StyleValue::from("auto")).unwrap(), "\"auto\"");

        let rule = StyleRule::new()
            .with("minHeight", 48)
            .with("@media (min-width:600px)", StyleRule::new().with("paddingTop", 6));
        assert_eq!(
            serde_json::to_string(&rule).unwrap(),
            r#"{"minHeight":48,"@media (min-width:600px)":{"paddingTop":6}}"#
        );
    }

    #[test]
    fn test_untagged_json() {
        let n: StyleValue = serde_json::from_str("48").unwrap();
        assert_eq!(n, StyleValue::Number(48.0));

        let s: StyleValue = serde_json::from_str("\"auto\"").unwrap();
        assert_eq!(s.as_text(), Some("auto"));

        let r: StyleValue = serde_json::from_str("{\"minHeight\": 10}").unwrap();
        assert!(r.is_rule());
        assert_eq!(
            r.as_rule().and_then(|r| r.get("minHeight")).and_then(StyleValue::as_number),
            Some(10.0)
        );
    }
}
