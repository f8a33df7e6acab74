mod error;
mod grammar;
mod parser;

pub use error::{ConfigError, ConfigErrors};
pub use parser::TextFileProviderFactory;

use crate::{FeatureProvider, SpecificationRegistry};

/// Parse configuration lines into a [`FeatureProvider`].
///
/// Every line is scanned and every feature validated before deciding; on
/// failure the returned [`ConfigErrors`] lists all problems in the order they
/// were found.
///
/// # Format
///
/// ```text
/// # comment
/// NewFeature = false
/// TheThing = myspecification
/// TheThing.myspecification.MyParam = 13
/// ```
///
/// # Errors
///
/// Returns [`ConfigErrors`] if any line is malformed or any specification
/// fails validation.
pub fn parse<S: AsRef<str>>(
    lines: &[S],
    registry: &SpecificationRegistry,
) -> Result<FeatureProvider, ConfigErrors> {
    parser::parse_lines(lines, registry)
}
