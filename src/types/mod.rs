mod checker;
mod error;
mod evaluation_report;
mod feature;
mod provider;
mod registry;
mod specification;

pub use checker::ToggleChecker;
pub use error::{DuplicateParameterError, InvalidSpecificationParameterError, ParameterError};
pub use evaluation_report::EvaluationReport;
pub(crate) use feature::AttachedSpecification;
pub use feature::{Feature, FeatureBuilder};
pub use provider::{FeatureProvider, FeatureProviderFactory, InMemoryProviderFactory};
pub use registry::SpecificationRegistry;
pub use specification::{FalseSpecification, Parameters, Specification, TrueSpecification};
