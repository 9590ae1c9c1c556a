//! Feature model and load-time resolution
//!
//! - `manifest`: identifiers, manifests, and hook factories
//! - `catalog`: the closed registry of statically linked providers
//! - `loader`: resolving the enabled list into manifests
//! - `extractor`: producing request handlers from manifests

pub mod catalog;
pub mod extractor;
pub mod loader;
pub mod manifest;

pub use catalog::{FeatureCatalog, FeatureProvider};
pub use extractor::extract_request_handlers;
pub use loader::load_manifests;
pub use manifest::{FeatureHooks, FeatureId, FeatureManifest, HookFactory};
