use std::fmt;

use thiserror::Error;

use crate::InvalidSpecificationParameterError;

/// A single problem found in a configuration document.
///
/// Line numbers are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing equal sign at line {line}.")]
    MissingEqualSign { line: usize },

    #[error("More than one equal sign at line {line}.")]
    MultipleEqualSigns { line: usize },

    #[error("Unknown specification '{name}' at line {line}.")]
    UnknownSpecification { name: String, line: usize },

    #[error(
        "Wrong parameter usage at line {line}. Use format [feature].[specification].[parametername] = [parametervalue]."
    )]
    WrongParameterUsage { line: usize },

    #[error("Parameter '{parameter}' declared twice at line {line}.")]
    ParameterDeclaredTwice { parameter: String, line: usize },

    #[error("Declare specification for feature '{feature}' before setting parameter at line {line}.")]
    UndeclaredSpecification { feature: String, line: usize },

    #[error(transparent)]
    InvalidParameter(#[from] InvalidSpecificationParameterError),
}

impl ConfigError {
    /// The offending line, if the error came from scanning rather than validation.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingEqualSign { line }
            | Self::MultipleEqualSigns { line }
            | Self::UnknownSpecification { line, .. }
            | Self::WrongParameterUsage { line }
            | Self::ParameterDeclaredTwice { line, .. }
            | Self::UndeclaredSpecification { line, .. } => Some(*line),
            Self::InvalidParameter(_) => None,
        }
    }
}

/// Every error found in a rejected configuration document, in the order they
/// were encountered: scanning errors by line, then validation errors.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigErrors {
    errors: Vec<ConfigError>,
}

impl ConfigErrors {
    /// `None` if `errors` is empty.
    pub(crate) fn new(errors: Vec<ConfigError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[ConfigError] {
        &self.errors
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; present for API symmetry with [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.errors.iter()
    }
}

impl IntoIterator for ConfigErrors {
    type Item = ConfigError;
    type IntoIter = std::vec::IntoIter<ConfigError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl fmt::Display for ConfigErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_messages() {
        let cases = [
            (
                ConfigError::MissingEqualSign { line: 3 },
                "Missing equal sign at line 3.",
            ),
            (
                ConfigError::MultipleEqualSigns { line: 4 },
                "More than one equal sign at line 4.",
            ),
            (
                ConfigError::UnknownSpecification {
                    name: "b".into(),
                    line: 1,
                },
                "Unknown specification 'b' at line 1.",
            ),
            (
                ConfigError::WrongParameterUsage { line: 2 },
                "Wrong parameter usage at line 2. Use format [feature].[specification].[parametername] = [parametervalue].",
            ),
            (
                ConfigError::ParameterDeclaredTwice {
                    parameter: "Min".into(),
                    line: 7,
                },
                "Parameter 'Min' declared twice at line 7.",
            ),
            (
                ConfigError::UndeclaredSpecification {
                    feature: "f".into(),
                    line: 1,
                },
                "Declare specification for feature 'f' before setting parameter at line 1.",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn validation_error_is_transparent() {
        let err = ConfigError::from(InvalidSpecificationParameterError::new(
            "f",
            "Missing parameter 'Max'.",
        ));
        assert_eq!(
            err.to_string(),
            "Invalid specification parameter for feature 'f'. Missing parameter 'Max'."
        );
        assert_eq!(err.line(), None);
    }

    #[test]
    fn aggregate_joins_with_newlines() {
        let errors = ConfigErrors::new(vec![
            ConfigError::MissingEqualSign { line: 1 },
            ConfigError::MultipleEqualSigns { line: 2 },
        ])
        .unwrap();
        assert_eq!(
            errors.to_string(),
            "Missing equal sign at line 1.\nMore than one equal sign at line 2."
        );
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.errors()[1].line(), Some(2));
    }

    #[test]
    fn aggregate_is_never_empty() {
        assert!(ConfigErrors::new(Vec::new()).is_none());
    }
}
