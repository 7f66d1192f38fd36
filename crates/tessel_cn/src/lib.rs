//! # Tessel Component Library (tessel_cn)
//!
//! Themed menu components built on `tessel_style` rules and `tessel_theme`
//! tokens.
//!
//! - **Primitives**: `tessel_style` provides style rules, utility classes and
//!   override resolvers
//! - **Theme**: `tessel_theme` provides typography, breakpoints, spacing and
//!   per-component overrides
//! - **Components**: `tessel_cn` maps component state to classes, a composed
//!   style rule and the props forwarded to the list row
//!
//! ## Example
//!
//! ```ignore
//! use tessel_cn::prelude::*;
//!
//! ThemeState::init_default();
//!
//! let props = cn::menu_item("Profile").selected(true).render();
//! assert_eq!(props.role.as_deref(), Some("menuitem"));
//! assert!(props.class_name.contains("TesselMenuItem-selected"));
//! ```
//!
//! ## Components
//!
//! - **ListItem** - Generic list row primitive
//! - **MenuItem** - Selectable row for menus (selected, dense, gutters)

pub mod components;
pub mod element;

pub use components::*;
pub use element::{ElementRef, ElementTag};

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::menu_item::menu_item;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::list_item::{ListContext, ListItemProps};
    pub use crate::components::menu_item::{self, menu_item, MenuItem, MenuItemState};
    pub use crate::element::{ElementRef, ElementTag};
    // Re-export commonly needed style and theme types
    pub use tessel_style::{chain, ClassOverrides, StyleOverrides, StyleRule};
    pub use tessel_theme::{Theme, ThemeState};
}
