//! # Tessel Style
//!
//! Style primitives shared by the Tessel theme and component crates:
//!
//! - **Style rules**: ordered property maps with recursive deep merge
//!   ([`StyleRule`], [`StyleValue`])
//! - **Media queries**: width conditions usable as rule keys ([`MediaQuery`])
//! - **Utility classes**: interned, globally unique class names per component
//!   token ([`ClassNameRegistry`]) and slot composition ([`compose_classes`])
//! - **Override resolvers**: caller/theme style patches and their layered
//!   composition ([`OverridesResolver`], [`chain`], [`project`])
//!
//! # Example
//!
//! ```
//! use tessel_style::{StyleRule, StyleValue};
//!
//! let defaults = StyleRule::new().with("minHeight", 48).with("width", "auto");
//! let patch = StyleRule::new().with("minHeight", "auto");
//!
//! let rule = defaults.merged(&patch);
//! assert_eq!(rule.get("minHeight"), Some(&StyleValue::from("auto")));
//! assert_eq!(rule.get("width"), Some(&StyleValue::from("auto")));
//! ```

pub mod class_name;
pub mod compose;
pub mod media;
pub mod resolver;
pub mod rule;
pub mod value;

pub use class_name::{generate_utility_class, ClassNameRegistry};
pub use compose::{class_names, compose_classes, ClassOverrides, ClassSet, ComposedClasses};
pub use media::MediaQuery;
pub use resolver::{chain, project, Chain, OverridesResolver, Project, SharedResolver, StyleOverrides};
pub use rule::StyleRule;
pub use value::StyleValue;
