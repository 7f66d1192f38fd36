//! Theme definition and loading
//!
//! A [`Theme`] is the read-only context every component reads while
//! resolving its styles: typography scale, breakpoints, spacing unit,
//! palette, and per-component configuration ([`ComponentTheme`]).
//!
//! Themes load from TOML:
//!
//! ```
//! use tessel_theme::{Breakpoint, Theme};
//!
//! let theme = Theme::from_toml_str(r#"
//!     spacing = 4
//!
//!     [breakpoints]
//!     sm = 640
//!
//!     [components.TesselMenuItem.default_props]
//!     dense = true
//!
//!     [components.TesselMenuItem.style_overrides.root]
//!     color = "rebeccapurple"
//! "#).unwrap();
//!
//! assert_eq!(theme.spacing(2.0), 8.0);
//! assert_eq!(theme.breakpoints.value(Breakpoint::Sm), 640.0);
//! assert_eq!(theme.default_props("TesselMenuItem").and_then(|p| p.dense), Some(true));
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tessel_style::StyleOverrides;

use crate::breakpoints::Breakpoints;
use crate::error::Result;
use crate::palette::Palette;
use crate::typography::Typography;

/// Props a theme may preset for a component
///
/// Only fields left unset by the caller are filled from here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dense: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_gutters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub divider: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i32>,
    /// Structural tag, e.g. `li` or `div`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
}

/// Theme configuration for one component
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentTheme {
    /// Prop defaults applied before the component's own defaults
    pub default_props: DefaultProps,
    /// Style dictionary handed to the component's overrides resolver
    pub style_overrides: StyleOverrides,
}

/// Theme context shared by a render tree
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub typography: Typography,
    pub breakpoints: Breakpoints,
    pub palette: Palette,
    /// Spacing unit in px
    #[serde(rename = "spacing")]
    pub spacing_unit: f64,
    /// Component name (e.g. `TesselMenuItem`) -> configuration
    pub components: IndexMap<String, ComponentTheme>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            typography: Typography::default(),
            breakpoints: Breakpoints::default(),
            palette: Palette::default(),
            spacing_unit: 8.0,
            components: IndexMap::new(),
        }
    }
}

impl Theme {
    /// Parse and validate a theme from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let theme: Theme = toml::from_str(source)?;
        theme.validate()?;
        tracing::debug!(
            "Loaded theme with {} component overrides",
            theme.components.len()
        );
        Ok(theme)
    }

    /// Load and validate a theme file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading theme from {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.breakpoints.validate()
    }

    /// `factor` spacing units in px
    pub fn spacing(&self, factor: f64) -> f64 {
        self.spacing_unit * factor
    }

    /// Configuration for a component, if the theme has any
    pub fn component(&self, name: &str) -> Option<&ComponentTheme> {
        self.components.get(name)
    }

    /// Style dictionary for a component
    pub fn style_overrides(&self, name: &str) -> Option<&StyleOverrides> {
        self.component(name).map(|c| &c.style_overrides)
    }

    /// Prop defaults for a component
    pub fn default_props(&self, name: &str) -> Option<&DefaultProps> {
        self.component(name).map(|c| &c.default_props)
    }

    /// Builder-style component configuration
    pub fn with_component(mut self, name: impl Into<String>, component: ComponentTheme) -> Self {
        self.components.insert(name.into(), component);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::Breakpoint;
    use crate::error::ThemeError;
    use crate::typography::TypographyVariant;
    use tessel_style::{StyleRule, StyleValue};

    #[test]
    fn test_empty_toml_is_default() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_partial_breakpoints_keep_defaults() {
        let theme = Theme::from_toml_str("[breakpoints]\nsm = 640\n").unwrap();
        assert_eq!(theme.breakpoints.value(Breakpoint::Sm), 640.0);
        assert_eq!(theme.breakpoints.value(Breakpoint::Md), 960.0);
    }

    #[test]
    fn test_typography_variant_table() {
        let theme = Theme::from_toml_str(
            r#"
            [typography.body2]
            font_weight = 500
            font_size = "0.8rem"
            line_height = 1.2
            letter_spacing = "0em"
            "#,
        )
        .unwrap();

        let body2 = theme.typography.get(TypographyVariant::Body2);
        assert_eq!(body2.font_weight, 500);
        assert_eq!(body2.font_size, "0.8rem");
        // Untouched variants keep the default scale
        assert_eq!(theme.typography.body1.font_size, "1rem");
    }

    #[test]
    fn test_incomplete_variant_fails() {
        let err = Theme::from_toml_str("[typography.body1]\nfont_size = \"1rem\"\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_unordered_breakpoints_fail() {
        let err = Theme::from_toml_str("[breakpoints]\nsm = 2000\n").unwrap_err();
        assert!(matches!(err, ThemeError::BreakpointOrder { .. }));
    }

    #[test]
    fn test_style_overrides_keep_order() {
        let theme = Theme::from_toml_str(
            r#"
            [components.TesselMenuItem.style_overrides.root]
            minHeight = 40
            color = "red"

            [components.TesselMenuItem.style_overrides.root."&:hover"]
            color = "blue"
            "#,
        )
        .unwrap();

        let styles = theme.style_overrides("TesselMenuItem").unwrap();
        let root = &styles["root"];
        let keys: Vec<_> = root.keys().collect();
        assert_eq!(keys, vec!["minHeight", "color", "&:hover"]);
        assert_eq!(
            root.get_path(&["&:hover", "color"]),
            Some(&StyleValue::from("blue"))
        );
    }

    #[test]
    fn test_missing_component() {
        let theme = Theme::default();
        assert!(theme.style_overrides("TesselMenuItem").is_none());
        assert!(theme.default_props("TesselMenuItem").is_none());
    }

    #[test]
    fn test_with_component() {
        let mut overrides = StyleOverrides::new();
        overrides.insert("root".into(), StyleRule::new().with("color", "red"));
        let theme = Theme::default().with_component(
            "TesselMenuItem",
            ComponentTheme {
                default_props: DefaultProps {
                    dense: Some(true),
                    ..Default::default()
                },
                style_overrides: overrides,
            },
        );
        assert_eq!(theme.default_props("TesselMenuItem").unwrap().dense, Some(true));
        assert!(theme.style_overrides("TesselMenuItem").unwrap().contains_key("root"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Theme::load("/definitely/not/here/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
