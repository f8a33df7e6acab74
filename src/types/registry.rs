use std::collections::HashMap;
use std::fmt;

use super::specification::{FalseSpecification, Specification, TrueSpecification};

/// Case-insensitive table of specification prototypes, keyed by the name used
/// in configuration documents.
///
/// A new registry already knows the `true` and `false` shortcuts.
///
/// # Example
///
/// ```
/// use flagspec::{SpecificationRegistry, TrueSpecification};
///
/// let registry = SpecificationRegistry::new().with("always", TrueSpecification);
/// assert!(registry.contains("ALWAYS"));
/// assert!(registry.contains("false"));
/// ```
#[derive(Clone)]
pub struct SpecificationRegistry {
    prototypes: HashMap<String, Box<dyn Specification>>,
}

impl SpecificationRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            prototypes: HashMap::new(),
        };
        registry.register("true", TrueSpecification);
        registry.register("false", FalseSpecification);
        registry
    }

    /// Register a prototype. An existing entry with the same name is replaced.
    pub fn register(&mut self, name: &str, spec: impl Specification + 'static) {
        self.register_boxed(name, Box::new(spec));
    }

    pub fn register_boxed(&mut self, name: &str, spec: Box<dyn Specification>) {
        self.prototypes.insert(name.to_lowercase(), spec);
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, name: &str, spec: impl Specification + 'static) -> Self {
        self.register(name, spec);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Specification> {
        self.prototypes.get(&name.to_lowercase()).map(|spec| &**spec)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.prototypes.contains_key(&name.to_lowercase())
    }

    /// Fresh instance of the named prototype.
    pub(crate) fn instantiate(&self, name: &str) -> Option<Box<dyn Specification>> {
        self.get(name).map(|spec| spec.clone_box())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

impl Default for SpecificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SpecificationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.prototypes.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SpecificationRegistry")
            .field("names", &names)
            .finish()
    }
}
