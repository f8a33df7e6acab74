use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::error::{DuplicateParameterError, InvalidSpecificationParameterError};

/// A named predicate that contributes one vote to a feature's state.
///
/// Implementations are registered as prototypes in a
/// [`SpecificationRegistry`](super::SpecificationRegistry). The parser clones
/// a fresh instance for every declaration line, feeds it the parameters that
/// follow, and calls [`validate`](Self::validate) once before the instance is
/// frozen into a [`Feature`](super::Feature). After that only `&self` methods
/// are reachable.
///
/// # Example
///
/// ```
/// use flagspec::{
///     DuplicateParameterError, InvalidSpecificationParameterError, Parameters, Specification,
/// };
///
/// #[derive(Debug, Clone, Default)]
/// struct Weekend {
///     params: Parameters,
/// }
///
/// impl Specification for Weekend {
///     fn evaluate(&self) -> bool {
///         self.params.get("Enabled") == Some("yes")
///     }
///
///     fn set_parameter(
///         &mut self,
///         name: &str,
///         value: &str,
///     ) -> Result<(), DuplicateParameterError> {
///         self.params.insert(name, value)
///     }
///
///     fn validate(&self, feature: &str) -> Result<(), InvalidSpecificationParameterError> {
///         self.params.require(feature, "Enabled").map(|_| ())
///     }
///
///     fn clone_box(&self) -> Box<dyn Specification> {
///         Box::new(self.clone())
///     }
/// }
/// ```
pub trait Specification: fmt::Debug + Send + Sync {
    /// Evaluate the predicate. Must be a pure function of the parameter state.
    fn evaluate(&self) -> bool;

    /// Assign a raw parameter value.
    ///
    /// [`FeatureBuilder::add_parameter`](super::FeatureBuilder::add_parameter)
    /// rejects a repeated name before it reaches this method, so an
    /// implementation only sees each name once.
    ///
    /// Coercion problems are not reported here; they belong to
    /// [`validate`](Self::validate) so that one pass over a document can
    /// report every mistake.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateParameterError`] if `name` was already set on this
    /// instance.
    fn set_parameter(&mut self, name: &str, value: &str) -> Result<(), DuplicateParameterError>;

    /// Check that all required parameters are present and well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSpecificationParameterError`] naming `feature` and the
    /// offending parameter(s).
    fn validate(&self, feature: &str) -> Result<(), InvalidSpecificationParameterError>;

    /// Produce a fresh, independently mutable copy of this prototype.
    fn clone_box(&self) -> Box<dyn Specification>;
}

impl Clone for Box<dyn Specification> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Always enabled. Registered as `true`. Parameters are accepted and have no
/// effect on the vote.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrueSpecification;

/// Always disabled. Registered as `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FalseSpecification;

impl Specification for TrueSpecification {
    fn evaluate(&self) -> bool {
        true
    }

    fn set_parameter(&mut self, _name: &str, _value: &str) -> Result<(), DuplicateParameterError> {
        Ok(())
    }

    fn validate(&self, _feature: &str) -> Result<(), InvalidSpecificationParameterError> {
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Specification> {
        Box::new(*self)
    }
}

impl Specification for FalseSpecification {
    fn evaluate(&self) -> bool {
        false
    }

    fn set_parameter(&mut self, _name: &str, _value: &str) -> Result<(), DuplicateParameterError> {
        Ok(())
    }

    fn validate(&self, _feature: &str) -> Result<(), InvalidSpecificationParameterError> {
        Ok(())
    }

    fn clone_box(&self) -> Box<dyn Specification> {
        Box::new(*self)
    }
}

/// Raw parameter store for [`Specification`] implementations.
///
/// Names are matched case-insensitively and may only be set once. Values are
/// kept as written; typed access goes through [`parse`](Self::parse) or
/// [`require_parsed`](Self::require_parsed) at validation time.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: HashMap<String, String>,
}

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateParameterError`] if the name is already present.
    pub fn insert(&mut self, name: &str, value: &str) -> Result<(), DuplicateParameterError> {
        let key = name.to_lowercase();
        if self.values.contains_key(&key) {
            return Err(DuplicateParameterError::new(name));
        }
        self.values.insert(key, value.to_owned());
        Ok(())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Parse a parameter into `T`. `None` if absent, `Some(Err)` on bad input.
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(str::parse)
    }

    /// Raw value of a required parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSpecificationParameterError`] if the parameter is missing.
    pub fn require(
        &self,
        feature: &str,
        name: &str,
    ) -> Result<&str, InvalidSpecificationParameterError> {
        self.get(name).ok_or_else(|| {
            InvalidSpecificationParameterError::new(
                feature,
                format!("Missing parameter '{name}'."),
            )
        })
    }

    /// Typed value of a required parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSpecificationParameterError`] if the parameter is
    /// missing or does not parse as `T`.
    pub fn require_parsed<T: FromStr>(
        &self,
        feature: &str,
        name: &str,
    ) -> Result<T, InvalidSpecificationParameterError> {
        let raw = self.require(feature, name)?;
        raw.parse().map_err(|_| {
            InvalidSpecificationParameterError::new(
                feature,
                format!("Parameter '{name}' has invalid value '{raw}'."),
            )
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
