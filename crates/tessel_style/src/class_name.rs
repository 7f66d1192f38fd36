//! Utility class name generation
//!
//! Every component slot/state token maps to a stable, globally unique class
//! name of the form `{Component}-{token}`.
//!
//! Names are interned: generating the same `(component, token)` pair twice
//! returns the same `Arc<str>`. Registration is idempotent and safe to call
//! from concurrent render passes.

use std::sync::{Arc, OnceLock, RwLock};

use rustc_hash::FxHashMap;

/// Process-wide registry used by components
static GLOBAL_REGISTRY: OnceLock<ClassNameRegistry> = OnceLock::new();

/// Interning class name generator
pub struct ClassNameRegistry {
    /// component -> (token -> class name)
    names: RwLock<FxHashMap<String, FxHashMap<String, Arc<str>>>>,
}

impl std::fmt::Debug for ClassNameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassNameRegistry")
            .field("len", &self.len())
            .finish()
    }
}

impl Default for ClassNameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassNameRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            names: RwLock::new(FxHashMap::default()),
        }
    }

    /// The registry shared by all components in this process
    pub fn global() -> &'static ClassNameRegistry {
        GLOBAL_REGISTRY.get_or_init(ClassNameRegistry::new)
    }

    /// Generate (or look up) the class name for a component token
    pub fn generate(&self, component: &str, token: &str) -> Arc<str> {
        if let Ok(names) = self.names.read() {
            if let Some(name) = names.get(component).and_then(|slots| slots.get(token)) {
                return name.clone();
            }
        }

        let name: Arc<str> = format!("{component}-{token}").into();

        match self.names.write() {
            Ok(mut names) => names
                .entry(component.to_string())
                .or_default()
                .entry(token.to_string())
                .or_insert_with(|| {
                    tracing::trace!("Registered utility class {}", name);
                    name.clone()
                })
                .clone(),
            // A poisoned lock still yields a correct, just uncached, name
            Err(_) => name,
        }
    }

    /// Number of interned names
    pub fn len(&self) -> usize {
        self.names
            .read()
            .map(|names| names.values().map(|slots| slots.len()).sum())
            .unwrap_or(0)
    }

    /// Check if nothing has been interned yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate a class name through the global registry
pub fn generate_utility_class(component: &str, token: &str) -> Arc<str> {
    ClassNameRegistry::global().generate(component, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_generate_format() {
        let registry = ClassNameRegistry::new();
        assert_eq!(&*registry.generate("TesselMenuItem", "root"), "TesselMenuItem-root");
        assert_eq!(&*registry.generate("TesselListItem", "dense"), "TesselListItem-dense");
    }

    #[test]
    fn test_generate_is_idempotent() {
        let registry = ClassNameRegistry::new();
        let a = registry.generate("TesselMenuItem", "selected");
        let b = registry.generate("TesselMenuItem", "selected");

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);

        registry.generate("TesselListItem", "selected");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_concurrent_registration() {
        let registry = Arc::new(ClassNameRegistry::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.generate("TesselMenuItem", "gutters"))
            })
            .collect();

        let names: Vec<Arc<str>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(names.iter().all(|n| Arc::ptr_eq(n, &names[0])));
        assert_eq!(registry.len(), 1);
    }
}
