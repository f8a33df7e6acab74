//! Fail-closed feature toggles.
//!
//! Each flag carries one or more named [`Specification`]s; a flag is enabled
//! only when it exists, has at least one specification, and every
//! specification evaluates to `true`.
//!
//! Flags are usually declared in a line-oriented text document:
//!
//! ```text
//! # comment
//! NewFeature = false
//! Logon = true
//! TheThing = myspecification
//! TheThing.myspecification.MyParam = 13
//! ```
//!
//! See [`parse()`] for the exact rules and [`ToggleChecker`] for queries.

mod error;
mod evaluate;
pub mod parse;
mod source;
mod types;

pub use error::ToggleError;
pub use parse::{parse, ConfigError, ConfigErrors, TextFileProviderFactory};
pub use source::{FileReader, LineSource};
pub use types::{
    DuplicateParameterError, EvaluationReport, FalseSpecification, Feature, FeatureBuilder,
    FeatureProvider, FeatureProviderFactory, InMemoryProviderFactory,
    InvalidSpecificationParameterError, ParameterError, Parameters, Specification,
    SpecificationRegistry, ToggleChecker, TrueSpecification,
};
