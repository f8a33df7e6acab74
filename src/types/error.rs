use thiserror::Error;

/// Returned by [`Specification::set_parameter`](super::Specification::set_parameter)
/// when the same parameter is assigned twice on one specification instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parameter '{parameter}' is already set")]
pub struct DuplicateParameterError {
    pub parameter: String,
}

impl DuplicateParameterError {
    pub fn new(parameter: impl Into<String>) -> Self {
        Self {
            parameter: parameter.into(),
        }
    }
}

/// Returned by [`Specification::validate`](super::Specification::validate) when
/// required parameters are missing or cannot be coerced.
///
/// The message names the feature so an operator can find the offending lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid specification parameter for feature '{feature}'. {reason}")]
pub struct InvalidSpecificationParameterError {
    pub feature: String,
    pub reason: String,
}

impl InvalidSpecificationParameterError {
    pub fn new(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            reason: reason.into(),
        }
    }
}

/// Why [`FeatureBuilder::add_parameter`](super::FeatureBuilder::add_parameter) refused a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("specification '{specification}' is not declared on this feature")]
    UndeclaredSpecification { specification: String },

    #[error(transparent)]
    Duplicate(#[from] DuplicateParameterError),
}
