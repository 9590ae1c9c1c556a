//! Hook extraction
//!
//! Invokes each loaded feature's hook factory and collects the request
//! handlers in registry order. Factories run strictly one at a time so
//! installation side effects never race.

use crate::error::{FeatureError, Result};
use crate::feature::manifest::FeatureManifest;
use crate::pipeline::RequestHandler;
use tracing::{debug, warn};

/// Produce the request handlers for `manifests`, in order.
///
/// Each factory is awaited to completion before the next one is invoked. A
/// failing factory is logged and contributes nothing. There is no timeout:
/// a factory that never completes stalls pipeline assembly.
pub async fn extract_request_handlers(manifests: &[FeatureManifest]) -> Vec<RequestHandler> {
    let mut handlers = Vec::new();

    for manifest in manifests {
        match extract_one(manifest).await {
            Ok(Some(handler)) => {
                debug!(feature = %manifest.id, "Feature contributes a request handler");
                handlers.push(handler);
            }
            Ok(None) => {
                debug!(feature = %manifest.id, "Feature contributes no request handler");
            }
            Err(e) => {
                warn!(feature = %manifest.id, error = %e, "Failed to initialize feature hooks, skipping");
            }
        }
    }

    handlers
}

async fn extract_one(manifest: &FeatureManifest) -> Result<Option<RequestHandler>> {
    let factory = match &manifest.hook_factory {
        Some(factory) => factory,
        None => return Ok(None),
    };

    let hooks = factory
        .produce()
        .await
        .map_err(|e| FeatureError::HookFactory {
            id: manifest.id.to_string(),
            reason: e.to_string(),
        })?;

    Ok(hooks.request_handler)
}
