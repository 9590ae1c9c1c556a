//! Process-lifetime feature runtime
//!
//! Owns the registry configuration, the feature catalog, and the composed
//! pipeline. The pipeline is assembled on first use and reused for every
//! request after that; concurrent first requests share one assembly pass.

use crate::config::FeaturesConfig;
use crate::feature::{extractor, loader, FeatureCatalog};
use crate::pipeline::{ComposedPipeline, RequestEvent, Resolver, Response};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

pub struct FeatureRuntime {
    config: FeaturesConfig,
    catalog: FeatureCatalog,
    pipeline: OnceCell<ComposedPipeline>,
}

impl FeatureRuntime {
    pub fn new(config: FeaturesConfig, catalog: FeatureCatalog) -> Self {
        Self {
            config,
            catalog,
            pipeline: OnceCell::new(),
        }
    }

    /// Runtime backed by the built-in feature catalog.
    pub fn with_default_catalog(config: FeaturesConfig) -> Self {
        Self::new(config, crate::builtin::default_catalog())
    }

    /// Serve one request through the feature pipeline.
    ///
    /// The pipeline is assembled on the first call and cached for the life
    /// of this runtime. Changes to the feature configuration take effect
    /// only in a newly constructed runtime, which for the conventional
    /// one-runtime-per-process setup means a restart.
    pub async fn handle(&self, event: RequestEvent, resolver: Arc<dyn Resolver>) -> Response {
        let pipeline = self.pipeline.get_or_init(|| self.assemble()).await;
        pipeline.invoke(event, resolver).await
    }

    async fn assemble(&self) -> ComposedPipeline {
        let manifests = loader::load_manifests(&self.catalog, &self.config.enabled).await;
        let handlers = extractor::extract_request_handlers(&manifests).await;

        info!(
            enabled = self.config.enabled.len(),
            loaded = manifests.len(),
            handlers = handlers.len(),
            "Feature pipeline assembled"
        );

        ComposedPipeline::compose(handlers)
    }
}
