//! Menu Item component for dropdown and menu surfaces
//!
//! A selectable, clickable row built on the [list item](super::list_item)
//! primitive. The menu item resolves its semantic flags into utility classes
//! and a style rule, then forwards both together with accessibility
//! attributes to the list row.
//!
//! # Example
//!
//! ```ignore
//! use tessel_cn::prelude::*;
//!
//! // Plain item
//! cn::menu_item("Profile")
//!
//! // Selected, compact item
//! cn::menu_item("My account").selected(true).dense(true)
//!
//! // Caller classes are appended after the generated ones
//! cn::menu_item("Logout").class("root", "danger")
//!
//! // Extend the stock style resolver instead of replacing it
//! cn::menu_item("Settings").overrides_resolver(chain(
//!     menu_item::overrides_resolver,
//!     |_: &MenuItemState, _: &StyleOverrides| StyleRule::new().with("color", "teal"),
//! ))
//! ```
//!
//! # Style layers
//!
//! The rule is deep-merged from three layers, lowest first:
//!
//! 1. defaults: `body1` typography, `minHeight: 48`, `6px` vertical padding,
//!    and `minHeight: auto` from the `sm` breakpoint up
//! 2. dense: `body2` typography and `minHeight: auto` at every width
//! 3. overrides resolver output, fed with the theme's `TesselMenuItem`
//!    style dictionary

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tessel_style::resolver::merge_slots;
use tessel_style::{
    chain, class_names, compose_classes, generate_utility_class, project, ClassOverrides,
    ClassSet, ComposedClasses, OverridesResolver, SharedResolver, StyleOverrides, StyleRule,
};
use tessel_theme::{Breakpoint, Theme, ThemeState, TypographyVariant};

use super::list_item::{self, ListContext, ListItemProps, ListItemState};
use crate::element::{ElementRef, ElementTag};

/// Theme key and class prefix of the menu item
pub const COMPONENT_NAME: &str = "TesselMenuItem";

/// Minimum row height below the `sm` breakpoint
pub const MIN_HEIGHT: f64 = 48.0;

/// Top and bottom padding
pub const PADDING_Y: f64 = 6.0;

/// ARIA role used unless the caller or theme sets one
pub const DEFAULT_ROLE: &str = "menuitem";

/// Tab index of enabled items: focusable, but outside the tab sequence
pub const DEFAULT_TAB_INDEX: i32 = -1;

const AUTO: &str = "auto";

/// Semantic flags of a menu item, recomputed on every render
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct MenuItemState {
    /// Item is the active choice
    pub selected: bool,
    /// Interaction suppressed
    pub disabled: bool,
    /// Horizontal padding removed
    pub disable_gutters: bool,
    /// Compact vertical sizing
    pub dense: bool,
}

impl MenuItemState {
    /// State of the underlying list row
    pub fn to_list_item(&self) -> ListItemState {
        ListItemState {
            dense: self.dense,
            disable_gutters: self.disable_gutters,
            button: true,
            selected: self.selected,
            disabled: self.disabled,
            ..Default::default()
        }
    }
}

// =============================================================================
// Classes
// =============================================================================

/// Class name of a menu item token
pub fn get_menu_item_utility_class(token: &str) -> Arc<str> {
    generate_utility_class(COMPONENT_NAME, token)
}

/// Generated class names of every menu item slot and state
///
/// Usable as nested selector keys, e.g. `&.TesselMenuItem-selected`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItemClasses {
    pub root: Arc<str>,
    pub gutters: Arc<str>,
    pub selected: Arc<str>,
    pub dense: Arc<str>,
    pub disabled: Arc<str>,
}

impl MenuItemClasses {
    /// Class names from the global registry
    pub fn get() -> Self {
        Self {
            root: get_menu_item_utility_class("root"),
            gutters: get_menu_item_utility_class("gutters"),
            selected: get_menu_item_utility_class("selected"),
            dense: get_menu_item_utility_class("dense"),
            disabled: get_menu_item_utility_class("disabled"),
        }
    }
}

/// Ordered state tokens: `root`, `selected?`, `gutters?`, `dense?`
pub fn class_set(state: &MenuItemState) -> ClassSet {
    ClassSet::new("root")
        .with_if(state.selected, "selected")
        .with_if(!state.disable_gutters, "gutters")
        .with_if(state.dense, "dense")
}

/// Composed class strings; caller classes are appended per token
pub fn utility_classes(state: &MenuItemState, classes: Option<&ClassOverrides>) -> ComposedClasses {
    let root = class_set(state);
    compose_classes([("root", &root)], get_menu_item_utility_class, classes)
}

// =============================================================================
// Styles
// =============================================================================

fn dense_overrides(state: &MenuItemState, styles: &StyleOverrides) -> StyleRule {
    merge_slots(styles, [(state.dense, "dense")])
}

/// Stock overrides resolver
///
/// Delegates to the list item's resolver and adds the `dense` slot on top.
pub fn overrides_resolver(state: &MenuItemState, styles: &StyleOverrides) -> StyleRule {
    chain(
        project(list_item::overrides_resolver, MenuItemState::to_list_item),
        dense_overrides,
    )
    .resolve(state, styles)
}

/// Computed defaults plus the dense layer, without any overrides
pub fn base_styles(state: &MenuItemState, theme: &Theme) -> StyleRule {
    let typography = &theme.typography;

    let mut rule = typography.variant_rule(TypographyVariant::Body1);
    rule.set("minHeight", MIN_HEIGHT);
    rule.set("paddingTop", PADDING_Y);
    rule.set("paddingBottom", PADDING_Y);
    rule.set("boxSizing", "border-box");
    rule.set("width", AUTO);
    rule.set("whiteSpace", "nowrap");
    rule.set(
        theme.breakpoints.up(Breakpoint::Sm).to_string(),
        StyleRule::new().with("minHeight", AUTO),
    );

    if state.dense {
        let mut dense = typography.variant_rule(TypographyVariant::Body2);
        dense.set("minHeight", AUTO);
        rule.merge(&dense);
    }
    rule
}

/// Resolve the final style rule of a menu item
///
/// `resolver` replaces the stock [`overrides_resolver`] when given; chain
/// onto the stock resolver to extend it instead.
pub fn compose_styles(
    state: &MenuItemState,
    theme: &Theme,
    resolver: Option<&dyn OverridesResolver<MenuItemState>>,
) -> StyleRule {
    let mut rule = base_styles(state, theme);

    let empty = StyleOverrides::new();
    let styles = theme.style_overrides(COMPONENT_NAME).unwrap_or(&empty);
    let patch = match resolver {
        Some(resolver) => resolver.resolve(state, styles),
        None => overrides_resolver(state, styles),
    };
    rule.merge(&patch);
    rule
}

// =============================================================================
// Attributes
// =============================================================================

/// Tab index forwarded to the row
///
/// Disabled items forward none so native semantics apply.
pub fn tab_index(disabled: bool, tab_index: Option<i32>) -> Option<i32> {
    if disabled {
        None
    } else {
        Some(tab_index.unwrap_or(DEFAULT_TAB_INDEX))
    }
}

// =============================================================================
// Component
// =============================================================================

/// Menu item builder
///
/// Unset options take the enclosing list's context first (for `dense`), the
/// theme's `TesselMenuItem` default props second and the built-in defaults
/// last.
#[derive(Clone, Default)]
pub struct MenuItem {
    label: String,
    selected: Option<bool>,
    disabled: Option<bool>,
    disable_gutters: Option<bool>,
    dense: Option<bool>,
    role: Option<String>,
    tab_index: Option<i32>,
    component: Option<ElementTag>,
    classes: ClassOverrides,
    class_name: Option<String>,
    list_item_classes: ClassOverrides,
    overrides_resolver: Option<SharedResolver<MenuItemState>>,
    attributes: IndexMap<String, String>,
    node_ref: Option<ElementRef>,
    list_context: Option<ListContext>,
}

impl std::fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("selected", &self.selected)
            .field("disabled", &self.disabled)
            .field("disable_gutters", &self.disable_gutters)
            .field("dense", &self.dense)
            .field("role", &self.role)
            .field("tab_index", &self.tab_index)
            .field("component", &self.component)
            .field("classes", &self.classes)
            .field("class_name", &self.class_name)
            .field("overrides_resolver", &self.overrides_resolver.is_some())
            .field("list_context", &self.list_context)
            .finish()
    }
}

impl MenuItem {
    /// Create a menu item with a text label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    /// Mark as the active choice
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = Some(selected);
        self
    }

    /// Suppress interaction
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Remove horizontal padding
    pub fn disable_gutters(mut self, disable_gutters: bool) -> Self {
        self.disable_gutters = Some(disable_gutters);
        self
    }

    /// Use compact vertical sizing
    pub fn dense(mut self, dense: bool) -> Self {
        self.dense = Some(dense);
        self
    }

    /// Override the ARIA role
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the focus-order hint (ignored while disabled)
    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Render as a different tag or host component
    pub fn component(mut self, component: impl Into<ElementTag>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Replace all caller classes
    pub fn classes(mut self, classes: ClassOverrides) -> Self {
        self.classes = classes;
        self
    }

    /// Add a caller class for one token (`root`, `selected`, `gutters`, `dense`)
    pub fn class(mut self, token: impl Into<String>, class: impl Into<String>) -> Self {
        self.classes.insert(token, class);
        self
    }

    /// Extra class appended to the root class list
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Caller classes forwarded to the underlying list item
    pub fn list_item_classes(mut self, classes: ClassOverrides) -> Self {
        self.list_item_classes = classes;
        self
    }

    /// Replace the stock overrides resolver
    pub fn overrides_resolver<R>(mut self, resolver: R) -> Self
    where
        R: OverridesResolver<MenuItemState> + 'static,
    {
        self.overrides_resolver = Some(Arc::new(resolver));
        self
    }

    /// Forward an extra attribute verbatim
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Bind a ref the host renderer attaches to the row
    pub fn node_ref(mut self, node_ref: ElementRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Inherit settings from the list the item is rendered in
    pub fn list_context(mut self, context: ListContext) -> Self {
        self.list_context = Some(context);
        self
    }

    /// Normalized semantic state under `theme`
    pub fn state(&self, theme: &Theme) -> MenuItemState {
        let defaults = theme.default_props(COMPONENT_NAME);
        let inherited_dense = self.list_context.and_then(|c| c.dense);
        MenuItemState {
            selected: self.selected.unwrap_or(false),
            disabled: self.disabled.unwrap_or(false),
            disable_gutters: self
                .disable_gutters
                .or_else(|| defaults.and_then(|d| d.disable_gutters))
                .unwrap_or(false),
            dense: self
                .dense
                .or(inherited_dense)
                .or_else(|| defaults.and_then(|d| d.dense))
                .unwrap_or(false),
        }
    }

    /// Resolve against `theme` into props for the list row
    pub fn build(&self, theme: &Theme) -> ListItemProps {
        let defaults = theme.default_props(COMPONENT_NAME);
        let state = self.state(theme);

        let classes = utility_classes(&state, Some(&self.classes));
        let class_name = class_names([classes.root(), self.class_name.as_deref().unwrap_or("")]);
        let style = compose_styles(&state, theme, self.overrides_resolver.as_deref());

        let role = self
            .role
            .clone()
            .or_else(|| defaults.and_then(|d| d.role.clone()))
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());
        let requested_tab_index = self
            .tab_index
            .or_else(|| defaults.and_then(|d| d.tab_index));
        let component = self
            .component
            .clone()
            .or_else(|| {
                defaults
                    .and_then(|d| d.component.as_deref())
                    .map(ElementTag::from)
            })
            .unwrap_or_default();

        tracing::trace!("Resolved menu item {:?}: {:?} -> {}", self.label, state, class_name);

        ListItemProps {
            component,
            role: Some(role),
            tab_index: tab_index(state.disabled, requested_tab_index),
            button: true,
            selected: state.selected,
            disabled: state.disabled,
            dense: state.dense,
            disable_gutters: state.disable_gutters,
            divider: defaults.and_then(|d| d.divider).unwrap_or(false),
            classes: self.list_item_classes.clone(),
            class_name,
            style,
            label: self.label.clone(),
            attributes: self.attributes.clone(),
            node_ref: self.node_ref.clone(),
        }
    }

    /// Resolve against the global theme
    ///
    /// # Panics
    ///
    /// Panics if `ThemeState` has not been initialized.
    pub fn render(&self) -> ListItemProps {
        self.build(&ThemeState::get().theme())
    }
}

/// Create a menu item with a text label
///
/// # Example
///
/// ```ignore
/// use tessel_cn::prelude::*;
///
/// cn::menu_item("Copy").dense(true)
/// ```
pub fn menu_item(label: impl Into<String>) -> MenuItem {
    MenuItem::new(label)
}
