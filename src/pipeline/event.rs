//! Request model shared between features and the host
//!
//! `RequestEvent` is the per-request view handed down the pipeline and
//! `Response` is what comes back up. The terminal `Resolver` is implemented
//! by the hosting runtime and reached at most once per request.

use async_trait::async_trait;
use std::collections::HashMap;

/// One inbound request as seen by feature handlers.
///
/// `locals` is a scratch map features use to hand values to downstream
/// handlers and the host, such as a session looked up once.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEvent {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub headers: HashMap<String, String>,
    pub locals: HashMap<String, serde_json::Value>,
}

impl RequestEvent {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            query: HashMap::new(),
            headers: HashMap::new(),
            locals: HashMap::new(),
        }
    }

    /// Header names are case-insensitive and stored lowercase.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn local(&self, key: &str) -> Option<&serde_json::Value> {
        self.locals.get(key)
    }

    pub fn set_local(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.locals.insert(key.into(), value);
    }
}

/// Response travelling back up the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: body.into(),
        }
    }

    /// Empty-bodied response with a `location` header.
    pub fn redirect(status: u16, location: impl Into<String>) -> Self {
        Self::new(status).with_header("location", location)
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Rendering directives a handler can attach for the terminal resolver.
///
/// The outermost handler to attach options wins; options supplied deeper in
/// the chain are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveOptions {
    pub directives: HashMap<String, serde_json::Value>,
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_directive(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.directives.insert(key.into(), value);
        self
    }

    pub fn directive(&self, key: &str) -> Option<&serde_json::Value> {
        self.directives.get(key)
    }
}

/// Terminal request resolver supplied by the hosting runtime.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, event: RequestEvent, options: Option<ResolveOptions>) -> Response;
}
