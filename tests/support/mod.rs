//! Shared helpers for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use featurekit::feature::{FeatureHooks, FeatureId, FeatureManifest};
use featurekit::pipeline::{RequestEvent, ResolveOptions, Resolver, Response};
use std::sync::{Arc, Mutex};

/// Terminal resolver that echoes the request and records that it ran.
pub struct EchoResolver {
    log: Arc<Mutex<Vec<String>>>,
}

impl EchoResolver {
    pub fn new(log: Arc<Mutex<Vec<String>>>) -> Self {
        Self { log }
    }
}

#[async_trait]
impl Resolver for EchoResolver {
    async fn resolve(&self, event: RequestEvent, options: Option<ResolveOptions>) -> Response {
        self.log.lock().unwrap().push("resolve".to_string());

        let mut response = Response::text(200, format!("{} {}", event.method, event.path));
        if let Some(options) = options {
            if let Some(marker) = options.directive("marker") {
                response = response.with_header("x-marker", marker.as_str().unwrap_or_default());
            }
        }
        if let Some(session) = event.local("session").and_then(|v| v.as_str()) {
            response = response.with_header("x-session", session);
        }
        response
    }
}

/// Feature whose handler logs around the continuation, exposing nesting.
pub fn logging_feature(id: &str, log: Arc<Mutex<Vec<String>>>) -> FeatureManifest {
    let tag = id.to_string();
    FeatureManifest::new(FeatureId::parse(id).unwrap(), id.to_string()).with_hooks(move || {
        let log = Arc::clone(&log);
        let tag = tag.clone();
        async move {
            Ok(FeatureHooks::new().with_request_handler(move |event, next| {
                let log = Arc::clone(&log);
                let tag = tag.clone();
                async move {
                    log.lock().unwrap().push(format!("{tag}:before"));
                    let response = next.resolve(event).await;
                    log.lock().unwrap().push(format!("{tag}:after"));
                    response
                }
            }))
        }
    })
}

/// Feature whose handler answers directly without calling the continuation.
pub fn blocking_feature(id: &str, log: Arc<Mutex<Vec<String>>>, status: u16) -> FeatureManifest {
    let tag = id.to_string();
    FeatureManifest::new(FeatureId::parse(id).unwrap(), id.to_string()).with_hooks(move || {
        let log = Arc::clone(&log);
        let tag = tag.clone();
        async move {
            Ok(FeatureHooks::new().with_request_handler(move |_event, _next| {
                let log = Arc::clone(&log);
                let tag = tag.clone();
                async move {
                    log.lock().unwrap().push(format!("{tag}:short-circuit"));
                    Response::text(status, "stopped")
                }
            }))
        }
    })
}
