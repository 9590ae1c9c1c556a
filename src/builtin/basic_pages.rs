//! Starter feature contributing basic static pages.

use crate::feature::{FeatureHooks, FeatureId, FeatureManifest};

pub const ID: &str = "basic-pages";

pub fn manifest() -> FeatureManifest {
    FeatureManifest::new(FeatureId::parse(ID).unwrap(), "Basic Pages")
        .with_description("Example feature that contributes basic static pages.")
        .with_hooks(|| async { Ok(FeatureHooks::new()) })
}
