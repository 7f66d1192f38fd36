//! Utility class composition
//!
//! Components describe each slot as an ordered list of state tokens (a
//! [`ClassSet`]). [`compose_classes`] turns those tokens into generated class
//! names and appends any caller-supplied classes after the generated ones.
//!
//! ```
//! use tessel_style::{compose_classes, ClassOverrides, ClassSet, ClassNameRegistry};
//!
//! let registry = ClassNameRegistry::new();
//! let root = ClassSet::new("root").with_if(true, "selected").with_if(false, "dense");
//! let overrides = ClassOverrides::new().with("root", "my-item");
//!
//! let classes = compose_classes(
//!     [("root", &root)],
//!     |token| registry.generate("TesselMenuItem", token),
//!     Some(&overrides),
//! );
//! assert_eq!(classes.root(), "TesselMenuItem-root my-item TesselMenuItem-selected");
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered, deterministic list of state tokens for one slot
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ClassSet {
    tokens: SmallVec<[&'static str; 8]>,
}

impl ClassSet {
    /// Start a set with its constant slot token (usually `root`)
    pub fn new(slot: &'static str) -> Self {
        let mut tokens = SmallVec::new();
        tokens.push(slot);
        Self { tokens }
    }

    /// Append `token` when `active`
    pub fn push_if(&mut self, active: bool, token: &'static str) {
        if active {
            self.tokens.push(token);
        }
    }

    /// Builder-style `push_if`
    pub fn with_if(mut self, active: bool, token: &'static str) -> Self {
        self.push_if(active, token);
        self
    }

    /// Tokens in insertion order
    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    /// Check if a token is present
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| *t == token)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Never true for a set created through `new`
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Caller-chosen classes keyed by slot or state token
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassOverrides {
    classes: IndexMap<String, String>,
}

impl ClassOverrides {
    /// Create an empty override map
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `insert`
    pub fn with(mut self, token: impl Into<String>, class: impl Into<String>) -> Self {
        self.insert(token, class);
        self
    }

    /// Set the caller class for a token
    pub fn insert(&mut self, token: impl Into<String>, class: impl Into<String>) {
        self.classes.insert(token.into(), class.into());
    }

    /// Caller class for a token, trimmed; blank entries count as unset
    pub fn get(&self, token: &str) -> Option<&str> {
        self.classes
            .get(token)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }

    /// Check if no override is set
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Final class strings for every slot of a component
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposedClasses {
    slots: IndexMap<&'static str, String>,
}

impl ComposedClasses {
    /// Class string for a slot (empty if the slot is unknown)
    pub fn get(&self, slot: &str) -> &str {
        self.slots.get(slot).map(String::as_str).unwrap_or("")
    }

    /// Class string for the `root` slot
    pub fn root(&self) -> &str {
        self.get("root")
    }
}

/// Compose slot token sets into final class strings
///
/// For every token the generated class comes first, immediately followed by
/// the caller's class for that token if one was supplied.
pub fn compose_classes<'a, I, F>(
    slots: I,
    utility_class: F,
    overrides: Option<&ClassOverrides>,
) -> ComposedClasses
where
    I: IntoIterator<Item = (&'static str, &'a ClassSet)>,
    F: Fn(&str) -> Arc<str>,
{
    let slots = slots
        .into_iter()
        .map(|(slot, set)| {
            let mut parts: Vec<String> = Vec::with_capacity(set.len() * 2);
            for token in set.tokens() {
                parts.push(utility_class(token).to_string());
                if let Some(extra) = overrides.and_then(|o| o.get(token)) {
                    parts.push(extra.to_string());
                }
            }
            (slot, parts.join(" "))
        })
        .collect();

    ComposedClasses { slots }
}

/// Join class fragments, skipping empty ones
pub fn class_names<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
