//! Enabled-feature resolution
//!
//! Walks the enabled list in order, resolves each id against the catalog,
//! and collects the manifests that load cleanly. Failures are logged and
//! skipped; a broken feature never takes the pipeline down with it.

use crate::error::{FeatureError, Result};
use crate::feature::catalog::FeatureCatalog;
use crate::feature::manifest::{FeatureId, FeatureManifest};
use tracing::{debug, warn};

/// Resolve `enabled` ids against the catalog, preserving order.
///
/// Every failure (invalid id, unknown id, provider error, declared id not
/// matching the registered one) is reported as a warning and the entry is
/// skipped. The result can only shrink relative to the input, never
/// reorder.
pub async fn load_manifests(catalog: &FeatureCatalog, enabled: &[String]) -> Vec<FeatureManifest> {
    let mut manifests = Vec::with_capacity(enabled.len());

    for raw in enabled {
        match load_one(catalog, raw).await {
            Ok(manifest) => {
                debug!(feature = %manifest.id, "Loaded feature manifest");
                manifests.push(manifest);
            }
            Err(e) => {
                warn!(feature = %raw, error = %e, "Failed to load feature, skipping");
            }
        }
    }

    manifests
}

async fn load_one(catalog: &FeatureCatalog, raw: &str) -> Result<FeatureManifest> {
    let id = FeatureId::parse(raw)?;

    let provider = catalog
        .get(&id)
        .ok_or_else(|| FeatureError::NotRegistered(raw.to_string()))?;

    let manifest = provider
        .manifest()
        .await
        .map_err(|e| FeatureError::ManifestLoad {
            id: raw.to_string(),
            reason: e.to_string(),
        })?;

    // Declared id must match the id it was registered under
    if manifest.id != id {
        return Err(FeatureError::IdMismatch {
            id: raw.to_string(),
            declared: manifest.id.to_string(),
        });
    }

    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(id: &str) -> FeatureManifest {
        FeatureManifest::new(FeatureId::parse(id).unwrap(), id.to_string())
    }

    fn catalog_with(ids: &[&str]) -> FeatureCatalog {
        let mut catalog = FeatureCatalog::new();
        for id in ids {
            catalog.register_manifest(manifest(id));
        }
        catalog
    }

    #[tokio::test]
    async fn test_manifests_follow_enabled_order() {
        let catalog = catalog_with(&["alpha", "beta", "gamma"]);
        let enabled = vec!["gamma".to_string(), "alpha".to_string()];

        let manifests = load_manifests(&catalog, &enabled).await;
        let ids: Vec<&str> = manifests.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["gamma", "alpha"]);
    }

    #[tokio::test]
    async fn test_unknown_feature_skipped() {
        let catalog = catalog_with(&["alpha"]);
        let enabled = vec!["alpha".to_string(), "missing".to_string()];

        let manifests = load_manifests(&catalog, &enabled).await;
        assert_eq!(manifests.len(), 1);
        assert_eq!(manifests[0].id.as_str(), "alpha");
    }

    #[tokio::test]
    async fn test_declared_id_must_match_registration() {
        let mut catalog = FeatureCatalog::new();
        catalog.register_fn(FeatureId::parse("expected").unwrap(), || {
            Ok(manifest("other"))
        });

        let manifests = load_manifests(&catalog, &["expected".to_string()]).await;
        assert!(manifests.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_entries_load_twice() {
        let catalog = catalog_with(&["alpha"]);
        let enabled = vec!["alpha".to_string(), "alpha".to_string()];

        let manifests = load_manifests(&catalog, &enabled).await;
        assert_eq!(manifests.len(), 2);
    }
}
