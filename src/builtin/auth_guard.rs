//! Admin guard feature
//!
//! Short-circuits requests under the protected prefix when no session local
//! is present. Pairs with `auth-session`, which must run earlier in the
//! chain to populate the local.

use crate::builtin::auth_session::SESSION_LOCAL;
use crate::feature::{FeatureHooks, FeatureId, FeatureManifest};
use crate::pipeline::Response;
use tracing::warn;

pub const ID: &str = "auth-guard";

/// Path prefix the guard protects.
pub const PROTECTED_PREFIX: &str = "/admin";

pub fn manifest() -> FeatureManifest {
    FeatureManifest::new(FeatureId::parse(ID).unwrap(), "Auth Guard")
        .with_description("Rejects unauthenticated requests to admin paths.")
        .with_hooks(|| async {
            Ok(
                FeatureHooks::new().with_request_handler(|event, next| async move {
                    if event.path.starts_with(PROTECTED_PREFIX)
                        && event.local(SESSION_LOCAL).is_none()
                    {
                        warn!(path = %event.path, "Rejecting unauthenticated admin request");
                        return Response::text(401, "Unauthorized");
                    }
                    next.resolve(event).await
                }),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feature::extract_request_handlers;
    use crate::pipeline::{ComposedPipeline, RequestEvent, ResolveOptions, Resolver};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Ok200;

    #[async_trait]
    impl Resolver for Ok200 {
        async fn resolve(
            &self,
            _event: RequestEvent,
            _options: Option<ResolveOptions>,
        ) -> Response {
            Response::text(200, "page")
        }
    }

    async fn guard_pipeline() -> ComposedPipeline {
        ComposedPipeline::compose(extract_request_handlers(&[manifest()]).await)
    }

    #[tokio::test]
    async fn test_admin_without_session_rejected() {
        let pipeline = guard_pipeline().await;
        let response = pipeline
            .invoke(RequestEvent::new("GET", "/admin/users"), Arc::new(Ok200))
            .await;
        assert_eq!(response.status, 401);
    }

    #[tokio::test]
    async fn test_public_path_passes() {
        let pipeline = guard_pipeline().await;
        let response = pipeline
            .invoke(RequestEvent::new("GET", "/about"), Arc::new(Ok200))
            .await;
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_admin_with_session_passes() {
        let pipeline = guard_pipeline().await;

        let mut event = RequestEvent::new("GET", "/admin");
        event.set_local(SESSION_LOCAL, serde_json::json!("tok"));

        let response = pipeline.invoke(event, Arc::new(Ok200)).await;
        assert_eq!(response.status, 200);
    }
}
