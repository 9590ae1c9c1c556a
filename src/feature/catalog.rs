//! Closed registry of feature providers
//!
//! Features are statically linked and registered under their identifier
//! before the pipeline is assembled. The enabled list is resolved against
//! this catalog only; there is no dynamic module loading.

use crate::feature::manifest::{FeatureId, FeatureManifest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Source of a feature manifest.
///
/// `manifest` may suspend (features that assemble their metadata lazily) and
/// may fail; a failing provider only costs its own feature.
#[async_trait]
pub trait FeatureProvider: Send + Sync {
    async fn manifest(&self) -> anyhow::Result<FeatureManifest>;
}

struct ManifestFn<F> {
    build: F,
}

#[async_trait]
impl<F> FeatureProvider for ManifestFn<F>
where
    F: Fn() -> anyhow::Result<FeatureManifest> + Send + Sync,
{
    async fn manifest(&self) -> anyhow::Result<FeatureManifest> {
        (self.build)()
    }
}

struct StaticManifest {
    manifest: FeatureManifest,
}

#[async_trait]
impl FeatureProvider for StaticManifest {
    async fn manifest(&self) -> anyhow::Result<FeatureManifest> {
        Ok(self.manifest.clone())
    }
}

/// Id-keyed registry of every feature the host links in.
#[derive(Clone, Default)]
pub struct FeatureCatalog {
    providers: HashMap<FeatureId, Arc<dyn FeatureProvider>>,
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under `id`. Registering the same id again
    /// replaces the earlier provider.
    pub fn register<P>(&mut self, id: FeatureId, provider: P) -> &mut Self
    where
        P: FeatureProvider + 'static,
    {
        self.providers.insert(id, Arc::new(provider));
        self
    }

    /// Register a plain function as a provider.
    pub fn register_fn<F>(&mut self, id: FeatureId, build: F) -> &mut Self
    where
        F: Fn() -> anyhow::Result<FeatureManifest> + Send + Sync + 'static,
    {
        self.register(id, ManifestFn { build })
    }

    /// Register a fixed manifest value under its own id.
    pub fn register_manifest(&mut self, manifest: FeatureManifest) -> &mut Self {
        let id = manifest.id.clone();
        self.register(id, StaticManifest { manifest })
    }

    pub fn get(&self, id: &FeatureId) -> Option<Arc<dyn FeatureProvider>> {
        self.providers.get(id).cloned()
    }

    pub fn contains(&self, id: &FeatureId) -> bool {
        self.providers.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl fmt::Debug for FeatureCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.providers.keys().map(FeatureId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("FeatureCatalog")
            .field("features", &ids)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_manifest(id: &str) -> FeatureManifest {
        FeatureManifest::new(FeatureId::parse(id).unwrap(), "Demo")
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = FeatureCatalog::new();
        catalog.register_manifest(demo_manifest("demo"));

        let id = FeatureId::parse("demo").unwrap();
        assert!(catalog.contains(&id));

        let provider = catalog.get(&id).unwrap();
        let manifest = tokio_test::block_on(provider.manifest()).unwrap();
        assert_eq!(manifest.id, id);
    }

    #[test]
    fn test_register_fn_provider() {
        let mut catalog = FeatureCatalog::new();
        catalog.register_fn(FeatureId::parse("demo").unwrap(), || {
            Ok(demo_manifest("demo"))
        });

        let provider = catalog.get(&FeatureId::parse("demo").unwrap()).unwrap();
        let manifest = tokio_test::block_on(provider.manifest()).unwrap();
        assert_eq!(manifest.name, "Demo");
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut catalog = FeatureCatalog::new();
        catalog.register_manifest(demo_manifest("demo"));
        catalog.register_fn(FeatureId::parse("demo").unwrap(), || {
            Ok(FeatureManifest::new(
                FeatureId::parse("demo").unwrap(),
                "Replacement",
            ))
        });

        assert_eq!(catalog.len(), 1);
        let provider = catalog.get(&FeatureId::parse("demo").unwrap()).unwrap();
        let manifest = tokio_test::block_on(provider.manifest()).unwrap();
        assert_eq!(manifest.name, "Replacement");
    }

    #[test]
    fn test_unknown_id_not_found() {
        let catalog = FeatureCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get(&FeatureId::parse("ghost").unwrap()).is_none());
    }
}
