//! Registry of template factories keyed by variant.

use std::{collections::BTreeMap, fmt, sync::Arc};

use pagekit_core::{
    application::{ApplicationError, ports::DynTemplateFactory},
    domain::Variant,
    error::PagekitResult,
};
use tracing::{debug, instrument};

use crate::{PhpTemplateFactory, TwigTemplateFactory};

/// Maps each [`Variant`] to the factory producing its family.
#[derive(Clone, Default)]
pub struct FactoryRegistry {
    factories: BTreeMap<Variant, Arc<dyn DynTemplateFactory>>,
}

impl FactoryRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in family.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(TwigTemplateFactory);
        registry.register(PhpTemplateFactory);
        registry
    }

    /// Register a factory under its own variant, replacing any previous one.
    pub fn register<F>(&mut self, factory: F)
    where
        F: DynTemplateFactory + 'static,
    {
        let variant = factory.variant();
        if self.factories.insert(variant, Arc::new(factory)).is_some() {
            debug!(%variant, "replaced registered factory");
        }
    }

    /// Look up the factory for `variant`.
    #[instrument(skip(self))]
    pub fn get(&self, variant: Variant) -> PagekitResult<Arc<dyn DynTemplateFactory>> {
        self.factories
            .get(&variant)
            .cloned()
            .ok_or_else(|| ApplicationError::FactoryNotRegistered { variant }.into())
    }

    /// Registered variants, in canonical order.
    pub fn variants(&self) -> Vec<Variant> {
        self.factories.keys().copied().collect()
    }
}

impl fmt::Debug for FactoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactoryRegistry")
            .field("variants", &self.variants())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_core::error::PagekitError;

    #[test]
    fn builtin_registers_every_variant() {
        let registry = FactoryRegistry::with_builtin();
        assert_eq!(registry.variants(), Variant::ALL.to_vec());
    }

    #[test]
    fn empty_registry_reports_missing_factory() {
        let registry = FactoryRegistry::new();
        assert!(registry.variants().is_empty());
        assert!(matches!(
            registry.get(Variant::Twig),
            Err(PagekitError::Application(
                ApplicationError::FactoryNotRegistered {
                    variant: Variant::Twig
                }
            ))
        ));
    }

    #[test]
    fn lookup_returns_matching_family() {
        let registry = FactoryRegistry::with_builtin();
        for variant in Variant::ALL {
            assert_eq!(registry.get(variant).unwrap().variant(), variant);
        }
    }

    #[test]
    fn register_replaces_same_variant() {
        let mut registry = FactoryRegistry::new();
        registry.register(TwigTemplateFactory);
        registry.register(TwigTemplateFactory);
        assert_eq!(registry.variants(), vec![Variant::Twig]);
    }
}
