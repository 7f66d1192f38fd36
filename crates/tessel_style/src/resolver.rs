//! Style override resolvers
//!
//! An override resolver receives a component's semantic state and the
//! theme's style dictionary for that component ([`StyleOverrides`], slot name
//! to rule) and returns a patch that is deep-merged on top of the computed
//! styles.
//!
//! Resolvers compose by explicit function composition. A derived component
//! reuses its base component's resolver and only adds incremental clauses:
//!
//! ```
//! use tessel_style::{chain, resolver, OverridesResolver, StyleOverrides, StyleRule};
//!
//! struct State { dense: bool }
//!
//! let stock = chain(resolver::root::<State>, |state: &State, styles: &StyleOverrides| {
//!     if state.dense { resolver::slot(styles, "dense") } else { StyleRule::new() }
//! });
//!
//! let mut styles = StyleOverrides::new();
//! styles.insert("root".into(), StyleRule::new().with("color", "red"));
//! styles.insert("dense".into(), StyleRule::new().with("minHeight", 32));
//!
//! let patch = stock.resolve(&State { dense: true }, &styles);
//! assert!(patch.contains_key("color"));
//! assert!(patch.contains_key("minHeight"));
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::rule::StyleRule;

/// Theme style dictionary for one component: slot name -> rule
pub type StyleOverrides = IndexMap<String, StyleRule>;

/// Produces a style patch from component state and theme style overrides
pub trait OverridesResolver<S: ?Sized>: Send + Sync {
    /// Compute the patch merged on top of the component's own styles
    fn resolve(&self, state: &S, styles: &StyleOverrides) -> StyleRule;
}

impl<S: ?Sized, F> OverridesResolver<S> for F
where
    F: Fn(&S, &StyleOverrides) -> StyleRule + Send + Sync,
{
    fn resolve(&self, state: &S, styles: &StyleOverrides) -> StyleRule {
        self(state, styles)
    }
}

/// Shared, type-erased resolver held by component props
pub type SharedResolver<S> = Arc<dyn OverridesResolver<S>>;

/// Rule for a slot, or an empty rule if the theme does not define it
pub fn slot(styles: &StyleOverrides, name: &str) -> StyleRule {
    styles.get(name).cloned().unwrap_or_default()
}

/// Pass-through resolver: the theme's `root` slot
pub fn root<S: ?Sized>(_state: &S, styles: &StyleOverrides) -> StyleRule {
    slot(styles, "root")
}

/// Resolver that contributes nothing
pub fn none<S: ?Sized>(_state: &S, _styles: &StyleOverrides) -> StyleRule {
    StyleRule::new()
}

/// Merge the listed slots in order, skipping inactive ones
pub fn merge_slots<'a, I>(styles: &StyleOverrides, slots: I) -> StyleRule
where
    I: IntoIterator<Item = (bool, &'a str)>,
{
    let mut out = StyleRule::new();
    for (active, name) in slots {
        if let (true, Some(rule)) = (active, styles.get(name)) {
            out.merge(rule);
        }
    }
    out
}

/// Two resolvers layered: `upper` is deep-merged on top of `lower`
#[derive(Clone, Debug)]
pub struct Chain<L, U> {
    lower: L,
    upper: U,
}

impl<S: ?Sized, L, U> OverridesResolver<S> for Chain<L, U>
where
    L: OverridesResolver<S>,
    U: OverridesResolver<S>,
{
    fn resolve(&self, state: &S, styles: &StyleOverrides) -> StyleRule {
        let mut out = self.lower.resolve(state, styles);
        out.merge(&self.upper.resolve(state, styles));
        out
    }
}

/// Layer `upper` on top of `lower`
pub fn chain<L, U>(lower: L, upper: U) -> Chain<L, U> {
    Chain { lower, upper }
}

/// Adapts a resolver for state `T` to state `S` through a projection
pub struct Project<R, F, T> {
    inner: R,
    project: F,
    _state: PhantomData<fn() -> T>,
}

impl<R, F, T> std::fmt::Debug for Project<R, F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project").finish_non_exhaustive()
    }
}

impl<S, T, R, F> OverridesResolver<S> for Project<R, F, T>
where
    S: ?Sized,
    R: OverridesResolver<T>,
    F: Fn(&S) -> T + Send + Sync,
{
    fn resolve(&self, state: &S, styles: &StyleOverrides) -> StyleRule {
        self.inner.resolve(&(self.project)(state), styles)
    }
}

/// Run `inner` against the state produced by `project`
///
/// Lets a component delegate to the resolver of the component it is built
/// on, whose state type differs.
pub fn project<S, T, R, F>(inner: R, project: F) -> Project<R, F, T>
where
    S: ?Sized,
    R: OverridesResolver<T>,
    F: Fn(&S) -> T + Send + Sync,
{
    Project {
        inner,
        project,
        _state: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleValue;

    #[derive(Clone, Copy)]
    struct Base {
        dense: bool,
    }

    struct Derived {
        dense: bool,
        selected: bool,
    }

    fn styles() -> StyleOverrides {
        let mut styles = StyleOverrides::new();
        styles.insert(
            "root".into(),
            StyleRule::new().with("fontSize", "1rem").with("minHeight", 48),
        );
        styles.insert("dense".into(), StyleRule::new().with("minHeight", 32));
        styles.insert("selected".into(), StyleRule::new().with("color", "blue"));
        styles
    }

    fn base_resolver(state: &Base, styles: &StyleOverrides) -> StyleRule {
        merge_slots(styles, [(true, "root"), (state.dense, "dense")])
    }

    #[test]
    fn test_root_passthrough() {
        assert_eq!(root(&(), &styles()), slot(&styles(), "root"));
        assert!(root(&(), &StyleOverrides::new()).is_empty());
        assert!(none(&(), &styles()).is_empty());
    }

    #[test]
    fn test_merge_slots_order() {
        let patch = base_resolver(&Base { dense: true }, &styles());
        assert_eq!(patch.get("minHeight"), Some(&StyleValue::from(32)));
        assert_eq!(patch.get("fontSize"), Some(&StyleValue::from("1rem")));

        let patch = base_resolver(&Base { dense: false }, &styles());
        assert_eq!(patch.get("minHeight"), Some(&StyleValue::from(48)));
    }

    #[test]
    fn test_chain_keeps_both_layers() {
        let resolver = chain(
            project(base_resolver, |s: &Derived| Base { dense: s.dense }),
            |s: &Derived, styles: &StyleOverrides| merge_slots(styles, [(s.selected, "selected")]),
        );

        let patch = resolver.resolve(
            &Derived {
                dense: true,
                selected: true,
            },
            &styles(),
        );
        assert_eq!(patch.get("fontSize"), Some(&StyleValue::from("1rem")));
        assert_eq!(patch.get("minHeight"), Some(&StyleValue::from(32)));
        assert_eq!(patch.get("color"), Some(&StyleValue::from("blue")));
    }

    #[test]
    fn test_upper_layer_wins() {
        let resolver = chain(root::<()>, |_: &(), _: &StyleOverrides| {
            StyleRule::new().with("minHeight", "auto")
        });
        let patch = resolver.resolve(&(), &styles());
        assert_eq!(patch.get("minHeight"), Some(&StyleValue::from("auto")));
    }

    #[test]
    fn test_shared_resolver() {
        let shared: SharedResolver<Base> = Arc::new(base_resolver);
        let patch = shared.resolve(&Base { dense: false }, &styles());
        assert!(patch.contains_key("fontSize"));
    }
}
