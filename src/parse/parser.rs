use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::error::{ConfigError, ConfigErrors};
use super::grammar::{self, Line};
use crate::source::LineSource;
use crate::{
    FeatureBuilder, FeatureProvider, FeatureProviderFactory, ParameterError,
    SpecificationRegistry, ToggleError,
};

/// Features under construction, in order of first declaration.
#[derive(Debug, Default)]
struct Features {
    builders: Vec<FeatureBuilder>,
    index: HashMap<String, usize>,
}

impl Features {
    fn get_mut(&mut self, flag: &str) -> Option<&mut FeatureBuilder> {
        let idx = *self.index.get(&flag.to_lowercase())?;
        Some(&mut self.builders[idx])
    }

    fn entry(&mut self, flag: &str) -> &mut FeatureBuilder {
        let next = self.builders.len();
        let idx = *self.index.entry(flag.to_lowercase()).or_insert(next);
        if idx == next {
            debug!(feature = flag, "declared feature");
            self.builders.push(FeatureBuilder::new(flag));
        }
        &mut self.builders[idx]
    }
}

pub(crate) fn parse_lines<S: AsRef<str>>(
    lines: &[S],
    registry: &SpecificationRegistry,
) -> Result<FeatureProvider, ConfigErrors> {
    let mut features = Features::default();
    let mut errors = Vec::new();

    for (idx, row) in lines.iter().enumerate() {
        let line = idx + 1;
        let row: &str = row.as_ref();
        match grammar::line(row) {
            Line::Ignored => trace!(line, "skipped line"),
            Line::MissingEqualSign => errors.push(ConfigError::MissingEqualSign { line }),
            Line::MultipleEqualSigns => errors.push(ConfigError::MultipleEqualSigns { line }),
            Line::Assignment { key, value } => {
                if let Err(err) = assign(&mut features, registry, &key, value, line) {
                    errors.push(err);
                }
            }
        }
    }

    for builder in &features.builders {
        errors.extend(builder.validate().into_iter().map(ConfigError::from));
    }

    if let Some(errors) = ConfigErrors::new(errors) {
        warn!(errors = errors.len(), "rejected feature configuration");
        return Err(errors);
    }

    debug!(features = features.builders.len(), "parsed feature configuration");
    Ok(FeatureProvider::new(
        features.builders.into_iter().map(FeatureBuilder::build),
    ))
}

fn assign(
    features: &mut Features,
    registry: &SpecificationRegistry,
    key: &[&str],
    value: &str,
    line: usize,
) -> Result<(), ConfigError> {
    match key {
        [flag] => {
            let spec = registry
                .instantiate(value)
                .ok_or_else(|| ConfigError::UnknownSpecification {
                    name: value.to_owned(),
                    line,
                })?;
            features.entry(flag).add_specification(value, spec);
            Ok(())
        }
        [flag, specification, parameter] => {
            let feature =
                features
                    .get_mut(flag)
                    .ok_or_else(|| ConfigError::UndeclaredSpecification {
                        feature: (*flag).to_owned(),
                        line,
                    })?;
            feature
                .add_parameter(specification, parameter, value)
                .map_err(|err| match err {
                    ParameterError::UndeclaredSpecification { .. } => {
                        ConfigError::UndeclaredSpecification {
                            feature: (*flag).to_owned(),
                            line,
                        }
                    }
                    ParameterError::Duplicate(_) => ConfigError::ParameterDeclaredTwice {
                        parameter: (*parameter).to_owned(),
                        line,
                    },
                })
        }
        _ => Err(ConfigError::WrongParameterUsage { line }),
    }
}

/// Builds providers by parsing a text document from a [`LineSource`].
///
/// The source is read again on every [`create`](FeatureProviderFactory::create).
#[derive(Debug, Clone)]
pub struct TextFileProviderFactory<S> {
    source: S,
    registry: SpecificationRegistry,
}

impl<S: LineSource> TextFileProviderFactory<S> {
    pub fn new(source: S, registry: SpecificationRegistry) -> Self {
        Self { source, registry }
    }
}

impl<S: LineSource> FeatureProviderFactory for TextFileProviderFactory<S> {
    fn create(&self) -> Result<FeatureProvider, ToggleError> {
        let lines = self.source.content()?;
        Ok(parse_lines(lines.as_slice(), &self.registry)?)
    }
}
