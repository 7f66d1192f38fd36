//! Style rules
//!
//! [`StyleRule`] is an ordered mapping from property name to [`StyleValue`].
//! Rules compose in layers: a lower layer is built first and higher layers
//! are deep-merged on top of it with [`StyleRule::merge`].
//!
//! # Example
//!
//! ```
//! use tessel_style::{StyleRule, StyleValue};
//!
//! let base = StyleRule::new()
//!     .with("minHeight", 48)
//!     .with("@media (min-width:600px)", StyleRule::new().with("minHeight", "auto"));
//!
//! let patch = StyleRule::new().with(
//!     "@media (min-width:600px)",
//!     StyleRule::new().with("paddingTop", 4),
//! );
//!
//! let merged = base.merged(&patch);
//! let media = merged.get("@media (min-width:600px)").and_then(StyleValue::as_rule).unwrap();
//! // Nested rules merge instead of replacing each other
//! assert_eq!(media.len(), 2);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::media::MediaQuery;
use crate::value::StyleValue;

/// Properties whose numeric values are emitted without a `px` unit
const UNITLESS_PROPERTIES: &[&str] = &[
    "flex",
    "flexGrow",
    "flexShrink",
    "fontWeight",
    "lineHeight",
    "opacity",
    "order",
    "zIndex",
];

/// Ordered mapping from property name to value
///
/// Insertion order is preserved. Overwriting an existing key keeps the key's
/// original position.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRule {
    entries: IndexMap<String, StyleValue>,
}

impl StyleRule {
    /// Create a new empty rule
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a property, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Get the value for a property
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Follow a path of nested rule keys
    ///
    /// `rule.get_path(&["@media (min-width:600px)", "minHeight"])`
    pub fn get_path(&self, path: &[&str]) -> Option<&StyleValue> {
        let (last, parents) = path.split_last()?;
        let mut rule = self;
        for key in parents {
            rule = rule.get(key)?.as_rule()?;
        }
        rule.get(last)
    }

    /// Check if a property is set
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no property is set
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate property names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Deep-merge `other` on top of this rule
    ///
    /// Entries in `other` win. When both sides hold a nested rule for the same
    /// key the nested rules are merged recursively.
    pub fn merge(&mut self, other: &StyleRule) {
        for (key, value) in &other.entries {
            if let (Some(StyleValue::Rule(lower)), StyleValue::Rule(upper)) =
                (self.entries.get_mut(key), value)
            {
                lower.merge(upper);
                continue;
            }
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Deep-merge into a new rule, leaving `self` untouched
    pub fn merged(&self, other: &StyleRule) -> StyleRule {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    /// Resolve media blocks for a concrete viewport width
    ///
    /// Matching `@media` blocks are flattened into the rule in declaration
    /// order (later blocks win); non-matching ones are dropped. Nested
    /// selector rules are resolved recursively.
    pub fn at_viewport(&self, viewport_width: f64) -> StyleRule {
        let mut out = StyleRule::new();
        let mut matched = Vec::new();

        for (key, value) in &self.entries {
            if MediaQuery::is_media_key(key) {
                let applies = MediaQuery::parse(key).is_some_and(|q| q.matches(viewport_width));
                if let (true, StyleValue::Rule(body)) = (applies, value) {
                    matched.push(body.at_viewport(viewport_width));
                }
                continue;
            }
            match value {
                StyleValue::Rule(nested) => {
                    out.set(key.clone(), nested.at_viewport(viewport_width));
                }
                other => out.set(key.clone(), other.clone()),
            }
        }

        for body in &matched {
            out.merge(body);
        }
        out
    }

    // =========================================================================
    // CSS output
    // =========================================================================

    /// Render the rule as CSS text for `selector`
    ///
    /// Nested keys containing `&` are expanded against `selector`; other
    /// non-media nested keys are treated as descendant selectors.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        self.write_css(selector, "", &mut out);
        out
    }

    fn write_css(&self, selector: &str, indent: &str, out: &mut String) {
        let declarations: Vec<(&str, &StyleValue)> =
            self.iter().filter(|(_, v)| !v.is_rule()).collect();

        if !declarations.is_empty() {
            out.push_str(&format!("{indent}{selector} {{\n"));
            for (key, value) in declarations {
                out.push_str(&format!(
                    "{indent}  {}: {};\n",
                    kebab_case(key),
                    css_value(key, value)
                ));
            }
            out.push_str(&format!("{indent}}}\n"));
        }

        for (key, value) in &self.entries {
            let StyleValue::Rule(nested) = value else {
                continue;
            };
            if MediaQuery::is_media_key(key) {
                out.push_str(&format!("{indent}{key} {{\n"));
                nested.write_css(selector, &format!("{indent}  "), out);
                out.push_str(&format!("{indent}}}\n"));
            } else if key.contains('&') {
                nested.write_css(&key.replace('&', selector), indent, out);
            } else {
                nested.write_css(&format!("{selector} {key}"), indent, out);
            }
        }
    }
}

/// `minHeight` -> `min-height`, `WebkitTransition` -> `-webkit-transition`
///
/// The Microsoft prefix is lowercase in camelCase (`msTransform`) and still
/// gets the leading dash.
fn kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    if property
        .strip_prefix("ms")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
    {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn css_value(property: &str, value: &StyleValue) -> String {
    match value {
        StyleValue::Number(_) if UNITLESS_PROPERTIES.contains(&property) => value.to_string(),
        StyleValue::Number(_) => format!("{value}px"),
        _ => value.to_string(),
    }
}
