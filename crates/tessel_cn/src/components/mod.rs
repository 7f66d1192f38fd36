//! Themed components built on tessel_style rules
//!
//! Each component follows a consistent pattern:
//! - State struct of semantic flags (e.g., `MenuItemState`)
//! - Class resolver (`class_set` / `utility_classes`)
//! - Style composer (`compose_styles`) with a stock `overrides_resolver`
//! - Builder function (e.g., `menu_item("Label")`) producing forwarded props

pub mod list_item;
pub mod menu_item;

pub use list_item::{ListContext, ListItemProps, ListItemState};
pub use menu_item::{menu_item, MenuItem, MenuItemClasses, MenuItemState};
