use std::fmt;
use std::path::Path;

use super::evaluation_report::EvaluationReport;
use super::provider::{FeatureProvider, FeatureProviderFactory};
use super::registry::SpecificationRegistry;
use crate::source::{FileReader, LineSource};
use crate::ToggleError;

/// Answers whether a flag is enabled.
///
/// Unknown flags and flags without specifications are disabled. Queries never
/// fail and never mutate anything, so a checker can be shared across threads.
///
/// # Example
///
/// ```
/// use flagspec::{SpecificationRegistry, ToggleChecker};
///
/// let checker = ToggleChecker::from_lines(
///     &["# toggles", "NewCheckout = true", "LegacyReports = false"],
///     &SpecificationRegistry::new(),
/// )
/// .unwrap();
///
/// assert!(checker.is_enabled("newcheckout"));
/// assert!(!checker.is_enabled("LegacyReports"));
/// assert!(!checker.is_enabled("unknown"));
/// ```
#[derive(Debug, Clone)]
pub struct ToggleChecker {
    provider: FeatureProvider,
}

impl ToggleChecker {
    /// Build a checker from whatever provider the factory creates.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError`] if the factory fails.
    pub fn new(factory: &impl FeatureProviderFactory) -> Result<Self, ToggleError> {
        Ok(Self::from_provider(factory.create()?))
    }

    #[must_use]
    pub fn from_provider(provider: FeatureProvider) -> Self {
        Self { provider }
    }

    /// Parse configuration lines and build a checker.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError`] on I/O failure of the source or if the
    /// document contains any error.
    pub fn from_lines(
        source: &(impl LineSource + ?Sized),
        registry: &SpecificationRegistry,
    ) -> Result<Self, ToggleError> {
        let lines = source.content()?;
        let provider = crate::parse::parse(lines.as_slice(), registry)?;
        Ok(Self::from_provider(provider))
    }

    /// Read a configuration file and build a checker.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError`] on I/O or configuration failure.
    pub fn from_file(
        path: impl AsRef<Path>,
        registry: &SpecificationRegistry,
    ) -> Result<Self, ToggleError> {
        Self::from_lines(&FileReader::new(path), registry)
    }

    /// `true` only if the flag exists and every specification on it agrees.
    #[must_use]
    pub fn is_enabled(&self, flag: &str) -> bool {
        self.provider.get(flag).is_some_and(|f| f.is_enabled())
    }

    /// Evaluate a flag and report how each specification voted.
    pub fn evaluate_detailed(&self, flag: &str) -> EvaluationReport {
        crate::evaluate::evaluate_detailed(flag, self.provider.get(flag))
    }

    #[must_use]
    pub fn provider(&self) -> &FeatureProvider {
        &self.provider
    }
}

impl fmt::Display for ToggleChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ToggleChecker({})", self.provider)
    }
}
