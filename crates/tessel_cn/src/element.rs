//! Element plumbing forwarded to the host renderer

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural tag of a rendered row
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ElementTag {
    /// `<li>`
    #[default]
    Li,
    /// `<div>`
    Div,
    /// `<a>`
    Anchor,
    /// `<button>`
    Button,
    /// Any other tag or host component name
    Custom(String),
}

impl ElementTag {
    /// Tag name as emitted in markup
    pub fn as_str(&self) -> &str {
        match self {
            ElementTag::Li => "li",
            ElementTag::Div => "div",
            ElementTag::Anchor => "a",
            ElementTag::Button => "button",
            ElementTag::Custom(name) => name,
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ElementTag {
    fn from(name: &str) -> Self {
        match name {
            "li" => ElementTag::Li,
            "div" => ElementTag::Div,
            "a" => ElementTag::Anchor,
            "button" => ElementTag::Button,
            other => ElementTag::Custom(other.to_string()),
        }
    }
}

impl From<String> for ElementTag {
    fn from(name: String) -> Self {
        ElementTag::from(name.as_str())
    }
}

impl From<ElementTag> for String {
    fn from(tag: ElementTag) -> Self {
        tag.as_str().to_string()
    }
}

/// Opaque handle the host renderer binds to the rendered node
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementRef(String);

impl ElementRef {
    /// Create a ref with a stable key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The ref key
    pub fn key(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_from_str() {
        assert_eq!(ElementTag::from("li"), ElementTag::Li);
        assert_eq!(ElementTag::from("a"), ElementTag::Anchor);
        assert_eq!(
            ElementTag::from("router-link"),
            ElementTag::Custom("router-link".to_string())
        );
        assert_eq!(ElementTag::default().as_str(), "li");
    }

    #[test]
    fn test_tag_serializes_as_string() {
        assert_eq!(serde_json::to_string(&ElementTag::Div).unwrap(), "\"div\"");
        let tag: ElementTag = serde_json::from_str("\"button\"").unwrap();
        assert_eq!(tag, ElementTag::Button);
    }
}
