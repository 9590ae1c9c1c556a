use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Invalid feature id: {0}")]
    InvalidId(String),

    #[error("Feature not registered: {0}")]
    NotRegistered(String),

    #[error("Failed to load manifest for '{id}': {reason}")]
    ManifestLoad { id: String, reason: String },

    #[error("Manifest id '{declared}' does not match registered id '{id}'")]
    IdMismatch { id: String, declared: String },

    #[error("Hook factory for '{id}' failed: {reason}")]
    HookFactory { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, FeatureError>;
