//! Session-reading feature
//!
//! Lifts the `session` cookie into `event.locals` so downstream features and
//! the host can rely on it without re-parsing headers.

use crate::feature::{FeatureHooks, FeatureId, FeatureManifest};
use crate::pipeline::RequestEvent;

pub const ID: &str = "auth-session";

/// Local key under which the session token is stored.
pub const SESSION_LOCAL: &str = "session";

pub fn manifest() -> FeatureManifest {
    FeatureManifest::new(FeatureId::parse(ID).unwrap(), "Auth Session")
        .with_description("Reads the session cookie into event locals.")
        .with_hooks(|| async {
            Ok(
                FeatureHooks::new().with_request_handler(|mut event, next| async move {
                    if let Some(token) = session_token(&event) {
                        event.set_local(SESSION_LOCAL, serde_json::Value::String(token));
                    }
                    next.resolve(event).await
                }),
            )
        })
}

fn session_token(event: &RequestEvent) -> Option<String> {
    let cookies = event.header("cookie")?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == "session" && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}
