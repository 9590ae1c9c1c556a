//! Continuation-passing pipeline composition
//!
//! Handlers wrap each other in registry order: the first handler runs
//! outermost, each receives a one-shot [`Next`] covering the rest of the
//! chain, and past the last handler [`Next`] invokes the terminal resolver.
//! Composing zero handlers yields the identity pipeline.

use crate::pipeline::event::{RequestEvent, ResolveOptions, Resolver, Response};
use futures::future::BoxFuture;
use std::sync::Arc;

/// One feature-contributed stage of the request pipeline.
///
/// Called with the current event and the continuation for the rest of the
/// chain. A handler may forward and post-process the downstream response, or
/// answer directly without touching `next`.
pub type RequestHandler =
    Arc<dyn Fn(RequestEvent, Next) -> BoxFuture<'static, Response> + Send + Sync>;

/// Ordered handler chain, ready to serve requests.
///
/// Cheap to clone and safe to share; concurrent requests run the same chain
/// independently.
#[derive(Clone)]
pub struct ComposedPipeline {
    handlers: Arc<[RequestHandler]>,
}

impl ComposedPipeline {
    /// Compose `handlers` into a pipeline. Index 0 runs outermost.
    pub fn compose(handlers: Vec<RequestHandler>) -> Self {
        Self {
            handlers: handlers.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run `event` through the chain, ending at `resolver`.
    pub async fn invoke(&self, event: RequestEvent, resolver: Arc<dyn Resolver>) -> Response {
        let next = Next {
            chain: Arc::clone(&self.handlers),
            index: 0,
            resolver,
            options: None,
        };
        next.proceed(event).await
    }
}

/// One-shot continuation handed to each handler.
///
/// Both resolve methods consume the continuation, so a handler cannot run
/// the rest of the chain twice. Dropping it unused is the short-circuit
/// case. A fresh `Next` is constructed for every stage of every request.
pub struct Next {
    chain: Arc<[RequestHandler]>,
    index: usize,
    resolver: Arc<dyn Resolver>,
    options: Option<ResolveOptions>,
}

impl Next {
    /// Continue with the rest of the chain.
    pub async fn resolve(self, event: RequestEvent) -> Response {
        self.proceed(event).await
    }

    /// Continue with the rest of the chain, attaching resolver options.
    ///
    /// Options attached by an earlier handler take precedence; these are
    /// then ignored.
    pub async fn resolve_with(mut self, event: RequestEvent, options: ResolveOptions) -> Response {
        self.options.get_or_insert(options);
        self.proceed(event).await
    }

    async fn proceed(self, event: RequestEvent) -> Response {
        match self.chain.get(self.index) {
            Some(handler) => {
                let next = Next {
                    chain: Arc::clone(&self.chain),
                    index: self.index + 1,
                    resolver: Arc::clone(&self.resolver),
                    options: self.options,
                };
                handler(event, next).await
            }
            None => self.resolver.resolve(event, self.options).await,
        }
    }
}
