use std::collections::HashSet;
use std::fmt;

use super::error::{DuplicateParameterError, InvalidSpecificationParameterError, ParameterError};
use super::specification::Specification;

/// A specification instance together with the name it was declared under.
#[derive(Debug, Clone)]
pub(crate) struct AttachedSpecification {
    pub(crate) name: String,
    pub(crate) spec: Box<dyn Specification>,
    /// Lowercased names of the parameters already set on `spec`.
    parameters: HashSet<String>,
}

impl AttachedSpecification {
    fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Mutable stage of a [`Feature`], used while a configuration is being read.
///
/// Specifications can be appended and parameterized here; once
/// [`build`](Self::build) is called the result is frozen.
///
/// # Example
///
/// ```
/// use flagspec::{FalseSpecification, FeatureBuilder, TrueSpecification};
///
/// let feature = FeatureBuilder::new("checkout")
///     .with("true", TrueSpecification)
///     .with("false", FalseSpecification)
///     .build();
/// assert!(!feature.is_enabled());
/// ```
#[derive(Debug, Clone)]
pub struct FeatureBuilder {
    name: String,
    specifications: Vec<AttachedSpecification>,
}

impl FeatureBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifications: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a specification instance under the given name.
    pub fn add_specification(&mut self, name: &str, spec: Box<dyn Specification>) {
        self.specifications.push(AttachedSpecification {
            name: name.to_owned(),
            spec,
            parameters: HashSet::new(),
        });
    }

    /// Builder-style [`add_specification`](Self::add_specification).
    #[must_use]
    pub fn with(mut self, name: &str, spec: impl Specification + 'static) -> Self {
        self.add_specification(name, Box::new(spec));
        self
    }

    /// Set a parameter on the most recently added instance of `specification`.
    ///
    /// Parameter names are unique per instance (case-insensitive) for every
    /// specification, including ones that ignore their parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::UndeclaredSpecification`] if no instance with
    /// that name is attached, or [`ParameterError::Duplicate`] if the instance
    /// already has the parameter.
    pub fn add_parameter(
        &mut self,
        specification: &str,
        name: &str,
        value: &str,
    ) -> Result<(), ParameterError> {
        let attached = self
            .specifications
            .iter_mut()
            .rev()
            .find(|a| a.is_named(specification))
            .ok_or_else(|| ParameterError::UndeclaredSpecification {
                specification: specification.to_owned(),
            })?;
        let key = name.to_lowercase();
        if attached.parameters.contains(&key) {
            return Err(DuplicateParameterError::new(name).into());
        }
        attached.spec.set_parameter(name, value)?;
        attached.parameters.insert(key);
        Ok(())
    }

    /// Validate every attached specification, collecting all failures.
    pub fn validate(&self) -> Vec<InvalidSpecificationParameterError> {
        self.specifications
            .iter()
            .filter_map(|a| a.spec.validate(&self.name).err())
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specifications.is_empty()
    }

    /// Freeze into an immutable [`Feature`].
    #[must_use]
    pub fn build(self) -> Feature {
        Feature {
            name: self.name,
            specifications: self.specifications,
        }
    }
}

/// A flag and the specifications that decide it. Immutable and thread-safe.
#[derive(Debug, Clone)]
pub struct Feature {
    name: String,
    specifications: Vec<AttachedSpecification>,
}

impl Feature {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `false` without specifications, otherwise the AND of every vote.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        crate::evaluate::all_enabled(&self.specifications)
    }

    /// Names of the attached specifications, in declaration order.
    #[must_use]
    pub fn specification_names(&self) -> Vec<&str> {
        self.specifications.iter().map(|a| a.name.as_str()).collect()
    }

    /// Attached specifications, in declaration order.
    pub fn specifications(&self) -> impl Iterator<Item = (&str, &dyn Specification)> {
        self.specifications
            .iter()
            .map(|a| (a.name.as_str(), a.spec.as_ref()))
    }

    pub(crate) fn attached(&self) -> &[AttachedSpecification] {
        &self.specifications
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specifications.is_empty()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = [{}]",
            self.name,
            self.specification_names().join(", ")
        )
    }
}
