//! Feature manifests and hook factories
//!
//! A manifest is the self-description a feature registers: identifier,
//! display name, and an optional factory that produces the feature's hooks
//! when the pipeline is assembled.

use crate::error::{FeatureError, Result};
use crate::pipeline::{Next, RequestEvent, RequestHandler, Response};
use futures::future::{BoxFuture, FutureExt};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;

static ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Validated feature identifier.
///
/// Identifiers are restricted to ASCII letters, digits, hyphen, and
/// underscore. Anything else (path separators, dots, spaces, the empty
/// string) is rejected at construction, so an unvalidated id can never reach
/// a catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(String);

impl FeatureId {
    pub fn parse(raw: &str) -> Result<Self> {
        if ID_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(FeatureError::InvalidId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for FeatureId {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FeatureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Async factory producing a feature's hooks.
///
/// Factories run sequentially during pipeline assembly, each awaited before
/// the next starts. A failing factory only costs its own feature's hooks.
#[derive(Clone)]
pub struct HookFactory {
    inner: Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<FeatureHooks>> + Send + Sync>,
}

impl HookFactory {
    pub fn new<F, Fut>(factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<FeatureHooks>> + Send + 'static,
    {
        Self {
            inner: Arc::new(move || factory().boxed()),
        }
    }

    pub async fn produce(&self) -> anyhow::Result<FeatureHooks> {
        (self.inner)().await
    }
}

impl fmt::Debug for HookFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HookFactory")
    }
}

/// Self-description a feature contributes to the catalog.
#[derive(Debug, Clone)]
pub struct FeatureManifest {
    pub id: FeatureId,
    pub name: String,
    pub description: Option<String>,
    pub hook_factory: Option<HookFactory>,
}

impl FeatureManifest {
    pub fn new(id: FeatureId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            hook_factory: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_hooks<F, Fut>(mut self, factory: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<FeatureHooks>> + Send + 'static,
    {
        self.hook_factory = Some(HookFactory::new(factory));
        self
    }
}

/// Hooks a feature contributes to the host.
///
/// Currently a single optional request handler; a feature without one
/// participates without intercepting requests.
#[derive(Clone, Default)]
pub struct FeatureHooks {
    pub request_handler: Option<RequestHandler>,
}

impl FeatureHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_handler<F, Fut>(mut self, handler: F) -> Self
    where
        F: Fn(RequestEvent, Next) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.request_handler = Some(Arc::new(move |event, next| handler(event, next).boxed()));
        self
    }
}
