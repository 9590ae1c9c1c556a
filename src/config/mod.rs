//! Feature registry configuration
//!
//! The registry is a single `enabled` list naming the features to activate,
//! in pipeline order. It is read from `features.{toml,json,yaml,yml}` with
//! `FEATURES_*` environment overrides. Loading is fail-open: malformed input
//! degrades to an empty list so the host keeps serving with no features
//! active.

pub mod loader;
pub mod schema;

pub use loader::{load, load_from_dir};
pub use schema::FeaturesConfig;
