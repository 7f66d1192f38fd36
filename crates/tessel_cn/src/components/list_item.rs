//! List item primitive
//!
//! The generic list row that menu items and other row-like components are
//! built on. A row is described by [`ListItemState`]; the values a wrapping
//! component hands over for rendering are collected in [`ListItemProps`].
//!
//! # Example
//!
//! ```ignore
//! use tessel_cn::list_item::{self, ListItemState};
//!
//! let state = ListItemState { dense: true, ..Default::default() };
//! let classes = list_item::utility_classes(&state, None);
//! assert_eq!(classes.root(), "TesselListItem-root TesselListItem-dense TesselListItem-gutters");
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tessel_style::resolver::merge_slots;
use tessel_style::{
    class_names, compose_classes, generate_utility_class, ClassOverrides, ClassSet,
    ComposedClasses, StyleOverrides, StyleRule,
};
use tessel_theme::Theme;

use crate::element::{ElementRef, ElementTag};

/// Theme key and class prefix of the list item
pub const COMPONENT_NAME: &str = "TesselListItem";

/// Semantic flags of a list row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ListItemState {
    /// Compact vertical padding
    pub dense: bool,
    /// Horizontal padding removed
    pub disable_gutters: bool,
    /// Bottom border separating rows
    pub divider: bool,
    /// Row acts as a button (hover feedback)
    pub button: bool,
    /// Row is the active choice
    pub selected: bool,
    /// Interaction suppressed
    pub disabled: bool,
    /// Children aligned to the top instead of centered
    pub align_items_flex_start: bool,
}

/// Settings a list hands down to the rows rendered inside it
///
/// Unset fields leave the row's own resolution untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ListContext {
    /// Compact sizing inherited by rows that do not set `dense` themselves
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dense: Option<bool>,
}

/// Check that an attribute name is safe to emit unquoted in markup
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
}

/// Class name of a list item token
pub fn get_list_item_utility_class(token: &str) -> Arc<str> {
    generate_utility_class(COMPONENT_NAME, token)
}

/// Ordered state tokens for the root slot
pub fn class_set(state: &ListItemState) -> ClassSet {
    ClassSet::new("root")
        .with_if(state.dense, "dense")
        .with_if(!state.disable_gutters, "gutters")
        .with_if(state.divider, "divider")
        .with_if(state.disabled, "disabled")
        .with_if(state.button, "button")
        .with_if(state.align_items_flex_start, "alignItemsFlexStart")
        .with_if(state.selected, "selected")
}

/// Composed class strings for every slot
pub fn utility_classes(state: &ListItemState, classes: Option<&ClassOverrides>) -> ComposedClasses {
    let root = class_set(state);
    compose_classes([("root", &root)], get_list_item_utility_class, classes)
}

/// Theme style patch for a row
///
/// Merges the theme slots that apply to `state`, in order: `root`, `dense`,
/// `alignItemsFlexStart`, `divider`, `gutters`, `button`, `disabled`.
pub fn overrides_resolver(state: &ListItemState, styles: &StyleOverrides) -> StyleRule {
    merge_slots(
        styles,
        [
            (true, "root"),
            (state.dense, "dense"),
            (state.align_items_flex_start, "alignItemsFlexStart"),
            (state.divider, "divider"),
            (!state.disable_gutters, "gutters"),
            (state.button, "button"),
            (state.disabled, "disabled"),
        ],
    )
}

/// Built-in row styles
pub fn compose_styles(state: &ListItemState, theme: &Theme) -> StyleRule {
    let palette = &theme.palette;
    let mut rule = StyleRule::new()
        .with("display", "flex")
        .with("justifyContent", "flex-start")
        .with("alignItems", "center")
        .with("position", "relative")
        .with("textDecoration", "none")
        .with("width", "100%")
        .with("boxSizing", "border-box")
        .with("textAlign", "left")
        .with("paddingTop", 8)
        .with("paddingBottom", 8);

    if state.dense {
        rule.set("paddingTop", 4);
        rule.set("paddingBottom", 4);
    }
    if !state.disable_gutters {
        rule.set("paddingLeft", theme.spacing(2.0));
        rule.set("paddingRight", theme.spacing(2.0));
    }
    if state.align_items_flex_start {
        rule.set("alignItems", "flex-start");
    }
    if state.divider {
        rule.set("borderBottom", format!("1px solid {}", palette.divider));
        rule.set("backgroundClip", "padding-box");
    }
    if state.button {
        rule.set(
            "transition",
            "background-color 150ms cubic-bezier(0.4, 0, 0.2, 1) 0ms",
        );
        if !state.disabled {
            rule.set(
                "&:hover",
                StyleRule::new()
                    .with("textDecoration", "none")
                    .with("backgroundColor", palette.action_hover.as_str()),
            );
        }
    }
    if state.selected {
        rule.set("backgroundColor", palette.action_selected.as_str());
    }
    if state.disabled {
        rule.set("opacity", palette.action_disabled_opacity);
    }
    rule
}

/// Everything a wrapping component forwards to the list row renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ListItemProps {
    /// Structural tag
    pub component: ElementTag,
    /// ARIA role
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Focus-order hint; `None` leaves native semantics in place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i32>,
    pub button: bool,
    pub selected: bool,
    pub disabled: bool,
    pub dense: bool,
    pub disable_gutters: bool,
    pub divider: bool,
    /// Caller classes for the list item's own slots
    pub classes: ClassOverrides,
    /// Class string of the wrapping component (already composed)
    pub class_name: String,
    /// Style rule of the wrapping component, applied after the row's own
    pub style: StyleRule,
    /// Text content
    pub label: String,
    /// Extra attributes forwarded verbatim (`aria-*`, `data-*`, ...)
    pub attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<ElementRef>,
}

impl ListItemProps {
    /// Semantic state of the row
    pub fn state(&self) -> ListItemState {
        ListItemState {
            dense: self.dense,
            disable_gutters: self.disable_gutters,
            divider: self.divider,
            button: self.button,
            selected: self.selected,
            disabled: self.disabled,
            align_items_flex_start: false,
        }
    }

    /// Full class attribute: row classes followed by the wrapper's classes
    pub fn root_class_name(&self) -> String {
        let classes = utility_classes(&self.state(), Some(&self.classes));
        class_names([classes.root(), self.class_name.as_str()])
    }

    /// Final style: row defaults, row theme overrides, then the wrapper rule
    pub fn resolved_style(&self, theme: &Theme) -> StyleRule {
        let state = self.state();
        let mut rule = compose_styles(&state, theme);
        if let Some(styles) = theme.style_overrides(COMPONENT_NAME) {
            rule.merge(&overrides_resolver(&state, styles));
        }
        rule.merge(&self.style);
        rule
    }

    /// Emit the row as an HTML fragment
    pub fn to_html(&self) -> String {
        let tag = self.component.as_str();
        let mut attrs: Vec<(String, String)> = vec![("class".into(), self.root_class_name())];
        if let Some(role) = &self.role {
            attrs.push(("role".into(), role.clone()));
        }
        if let Some(tab_index) = self.tab_index {
            attrs.push(("tabindex".into(), tab_index.to_string()));
        }
        if self.disabled {
            attrs.push(("aria-disabled".into(), "true".into()));
        }
        for (name, value) in &self.attributes {
            if !is_valid_attribute_name(name) {
                tracing::warn!("Skipping invalid attribute name {:?}", name);
                continue;
            }
            attrs.push((name.clone(), value.clone()));
        }

        let mut out = format!("<{tag}");
        for (name, value) in &attrs {
            out.push_str(&format!(
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            ));
        }
        out.push('>');
        out.push_str(&html_escape::encode_text(&self.label));
        out.push_str(&format!("</{tag}>"));
        out
    }
}
