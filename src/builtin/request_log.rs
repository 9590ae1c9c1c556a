//! Request logging feature
//!
//! Wraps the rest of the chain and emits one structured line per request
//! with the response status and elapsed time.

use crate::feature::{FeatureHooks, FeatureId, FeatureManifest};
use std::time::Instant;
use tracing::info;

pub const ID: &str = "request-log";

pub fn manifest() -> FeatureManifest {
    FeatureManifest::new(FeatureId::parse(ID).unwrap(), "Request Log")
        .with_description("Logs method, path, status, and duration for every request.")
        .with_hooks(|| async {
            Ok(FeatureHooks::new().with_request_handler(|event, next| async move {
                let method = event.method.clone();
                let path = event.path.clone();
                let start = Instant::now();

                let response = next.resolve(event).await;

                info!(
                    method = %method,
                    path = %path,
                    status = response.status,
                    duration_ms = start.elapsed().as_millis() as u64,
                    "Request completed"
                );
                response
            }))
        })
}
