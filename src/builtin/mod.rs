//! Built-in features
//!
//! A small starter set covering the hook shapes features can take:
//! `basic-pages` contributes metadata only, `request-log` wraps the chain,
//! `auth-session` mutates the event and forwards, and `auth-guard`
//! short-circuits. Hosts get all of them through [`default_catalog`] and
//! activate any subset via the `enabled` list.

pub mod auth_guard;
pub mod auth_session;
pub mod basic_pages;
pub mod request_log;

use crate::feature::FeatureCatalog;

/// Catalog containing every built-in feature.
pub fn default_catalog() -> FeatureCatalog {
    let mut catalog = FeatureCatalog::new();
    catalog.register_manifest(basic_pages::manifest());
    catalog.register_manifest(request_log::manifest());
    catalog.register_manifest(auth_session::manifest());
    catalog.register_manifest(auth_guard::manifest());
    catalog
}
