use std::collections::HashMap;
use std::fmt;

use super::feature::Feature;
use crate::ToggleError;

/// An immutable, case-insensitive mapping from flag name to [`Feature`].
///
/// Built once (by the parser or from pre-built features) and never mutated.
/// Thread-safe and designed to live behind `Arc`.
#[derive(Debug, Clone, Default)]
pub struct FeatureProvider {
    features: Vec<Feature>,
    index: HashMap<String, usize>,
}

impl FeatureProvider {
    /// Build a provider from features. A later feature with the same
    /// (case-insensitive) name replaces an earlier one.
    #[must_use]
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        let mut provider = Self::default();
        for feature in features {
            let key = feature.name().to_lowercase();
            match provider.index.get(&key) {
                Some(&idx) => provider.features[idx] = feature,
                None => {
                    provider.index.insert(key, provider.features.len());
                    provider.features.push(feature);
                }
            }
        }
        provider
    }

    #[must_use]
    pub fn get(&self, flag: &str) -> Option<&Feature> {
        self.index
            .get(&flag.to_lowercase())
            .map(|&idx| &self.features[idx])
    }

    #[must_use]
    pub fn contains(&self, flag: &str) -> bool {
        self.index.contains_key(&flag.to_lowercase())
    }

    /// Flag names in declaration order.
    #[must_use]
    pub fn flags(&self) -> Vec<&str> {
        self.features.iter().map(Feature::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl fmt::Display for FeatureProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeatureProvider({} features)", self.features.len())
    }
}

/// Something that can produce a [`FeatureProvider`].
pub trait FeatureProviderFactory {
    /// # Errors
    ///
    /// Returns [`ToggleError`] if the features cannot be loaded.
    fn create(&self) -> Result<FeatureProvider, ToggleError>;
}

/// Serves a fixed set of pre-built features.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProviderFactory {
    features: Vec<Feature>,
}

impl InMemoryProviderFactory {
    #[must_use]
    pub fn new(features: impl IntoIterator<Item = Feature>) -> Self {
        Self {
            features: features.into_iter().collect(),
        }
    }
}

impl FeatureProviderFactory for InMemoryProviderFactory {
    fn create(&self) -> Result<FeatureProvider, ToggleError> {
        Ok(FeatureProvider::new(self.features.iter().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FalseSpecification, FeatureBuilder, TrueSpecification};

    fn on(name: &str) -> Feature {
        FeatureBuilder::new(name).with("true", TrueSpecification).build()
    }

    #[test]
    fn lookup_ignores_case() {
        let provider = FeatureProvider::new([on("NewCheckout")]);
        assert!(provider.get("newcheckout").is_some());
        assert!(provider.contains("NEWCHECKOUT"));
        assert!(provider.get("other").is_none());
    }

    #[test]
    fn keeps_declaration_order() {
        let provider = FeatureProvider::new([on("b"), on("a"), on("c")]);
        assert_eq!(provider.flags(), vec!["b", "a", "c"]);
        assert_eq!(provider.len(), 3);
        assert_eq!(provider.to_string(), "FeatureProvider(3 features)");
    }

    #[test]
    fn later_feature_replaces_earlier() {
        let off = FeatureBuilder::new("X").with("false", FalseSpecification).build();
        let provider = FeatureProvider::new([on("x"), off]);
        assert_eq!(provider.len(), 1);
        assert!(!provider.get("x").unwrap().is_enabled());
    }

    #[test]
    fn in_memory_factory_creates_fresh_providers() {
        let factory = InMemoryProviderFactory::new([on("a")]);
        let first = factory.create().unwrap();
        let second = factory.create().unwrap();
        assert_eq!(first.flags(), second.flags());
        assert!(first.get("a").unwrap().is_enabled());
    }

    #[test]
    fn provider_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeatureProvider>();
    }
}
