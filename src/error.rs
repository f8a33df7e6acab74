use thiserror::Error;

use crate::parse::ConfigErrors;

/// Unified error type covering configuration and I/O failures.
///
/// Returned by convenience constructors like
/// [`ToggleChecker::from_file()`](crate::ToggleChecker::from_file) and by
/// [`FeatureProviderFactory::create()`](crate::FeatureProviderFactory::create).
#[derive(Debug, Error)]
pub enum ToggleError {
    #[error(transparent)]
    Config(#[from] ConfigErrors),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
