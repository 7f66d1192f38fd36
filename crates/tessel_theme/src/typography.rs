//! Typography scale
//!
//! Each [`TypographyVariant`] maps to a [`TypographyStyle`]. Components spread
//! a variant into their style rules with [`Typography::variant_rule`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tessel_style::StyleRule;

use crate::error::{Result, ThemeError};

/// Default font stack
pub const DEFAULT_FONT_FAMILY: &str = "\"Roboto\", \"Helvetica\", \"Arial\", sans-serif";

/// Named entry of the typography scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypographyVariant {
    Subtitle1,
    Subtitle2,
    Body1,
    Body2,
    Button,
    Caption,
    Overline,
}

impl TypographyVariant {
    /// Every variant of the scale
    pub const ALL: [TypographyVariant; 7] = [
        TypographyVariant::Subtitle1,
        TypographyVariant::Subtitle2,
        TypographyVariant::Body1,
        TypographyVariant::Body2,
        TypographyVariant::Button,
        TypographyVariant::Caption,
        TypographyVariant::Overline,
    ];

    /// Name used in theme files
    pub fn name(self) -> &'static str {
        match self {
            TypographyVariant::Subtitle1 => "subtitle1",
            TypographyVariant::Subtitle2 => "subtitle2",
            TypographyVariant::Body1 => "body1",
            TypographyVariant::Body2 => "body2",
            TypographyVariant::Button => "button",
            TypographyVariant::Caption => "caption",
            TypographyVariant::Overline => "overline",
        }
    }
}

impl fmt::Display for TypographyVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypographyVariant {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        TypographyVariant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| ThemeError::UnknownTypographyVariant(s.to_string()))
    }
}

/// Font settings for one variant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypographyStyle {
    /// Overrides the scale-wide font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    pub font_weight: u16,
    /// CSS length, e.g. `1rem`
    pub font_size: String,
    pub line_height: f64,
    /// CSS length, e.g. `0.00938em`
    pub letter_spacing: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
}

impl TypographyStyle {
    /// Create a variant style
    pub fn new(
        font_weight: u16,
        font_size: impl Into<String>,
        line_height: f64,
        letter_spacing: impl Into<String>,
    ) -> Self {
        Self {
            font_family: None,
            font_weight,
            font_size: font_size.into(),
            line_height,
            letter_spacing: letter_spacing.into(),
            text_transform: None,
        }
    }

    /// Set the text transform (e.g. `uppercase`)
    pub fn transform(mut self, transform: impl Into<String>) -> Self {
        self.text_transform = Some(transform.into());
        self
    }

    /// Style declarations for this variant
    pub fn to_rule(&self, default_family: &str) -> StyleRule {
        let mut rule = StyleRule::new()
            .with(
                "fontFamily",
                self.font_family.as_deref().unwrap_or(default_family),
            )
            .with("fontWeight", self.font_weight)
            .with("fontSize", self.font_size.as_str())
            .with("lineHeight", self.line_height)
            .with("letterSpacing", self.letter_spacing.as_str());
        if let Some(transform) = &self.text_transform {
            rule.set("textTransform", transform.as_str());
        }
        rule
    }
}

/// Typography scale
///
/// Missing variant tables fall back to the default scale; a variant table
/// that is present must be complete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub font_family: String,
    pub subtitle1: TypographyStyle,
    pub subtitle2: TypographyStyle,
    pub body1: TypographyStyle,
    pub body2: TypographyStyle,
    pub button: TypographyStyle,
    pub caption: TypographyStyle,
    pub overline: TypographyStyle,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            subtitle1: TypographyStyle::new(400, "1rem", 1.75, "0.00938em"),
            subtitle2: TypographyStyle::new(500, "0.875rem", 1.57, "0.00714em"),
            body1: TypographyStyle::new(400, "1rem", 1.5, "0.00938em"),
            body2: TypographyStyle::new(400, "0.875rem", 1.43, "0.01071em"),
            button: TypographyStyle::new(500, "0.875rem", 1.75, "0.02857em").transform("uppercase"),
            caption: TypographyStyle::new(400, "0.75rem", 1.66, "0.03333em"),
            overline: TypographyStyle::new(400, "0.75rem", 2.66, "0.08333em")
                .transform("uppercase"),
        }
    }
}

impl Typography {
    /// Settings for a variant
    pub fn get(&self, variant: TypographyVariant) -> &TypographyStyle {
        match variant {
            TypographyVariant::Subtitle1 => &self.subtitle1,
            TypographyVariant::Subtitle2 => &self.subtitle2,
            TypographyVariant::Body1 => &self.body1,
            TypographyVariant::Body2 => &self.body2,
            TypographyVariant::Button => &self.button,
            TypographyVariant::Caption => &self.caption,
            TypographyVariant::Overline => &self.overline,
        }
    }

    /// Settings for a variant given by name
    pub fn get_named(&self, name: &str) -> Result<&TypographyStyle> {
        Ok(self.get(name.parse()?))
    }

    /// Style declarations for a variant, ready to spread into a rule
    pub fn variant_rule(&self, variant: TypographyVariant) -> StyleRule {
        self.get(variant).to_rule(&self.font_family)
    }
}
