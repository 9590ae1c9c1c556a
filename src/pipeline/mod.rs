//! Request pipeline
//!
//! `event` holds the request model shared between features and the host;
//! `composer` turns an ordered list of handlers into one
//! continuation-passing chain.

pub mod composer;
pub mod event;

pub use composer::{ComposedPipeline, Next, RequestHandler};
pub use event::{RequestEvent, ResolveOptions, Resolver, Response};
