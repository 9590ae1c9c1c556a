use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use std::path::Path;
use tracing::{debug, warn};

use super::schema::FeaturesConfig;

/// Environment prefix for overriding file-based configuration.
pub const ENV_PREFIX: &str = "FEATURES_";

/// Load the feature registry from the current directory.
pub fn load() -> FeaturesConfig {
    extract(figment_for(Path::new(".")))
}

/// Load the feature registry from config files under `dir`.
pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> FeaturesConfig {
    extract(figment_for(dir.as_ref()))
}

fn figment_for(dir: &Path) -> Figment {
    Figment::new()
        // Try the various config file formats, later ones taking precedence
        .merge(Toml::file(dir.join("features.toml")))
        .merge(Json::file(dir.join("features.json")))
        .merge(Yaml::file(dir.join("features.yaml")))
        .merge(Yaml::file(dir.join("features.yml")))
        // Override with environment variables (FEATURES_ prefix)
        .merge(Env::prefixed(ENV_PREFIX))
}

// Extraction never fails outward: an unreadable registry means no features.
fn extract(figment: Figment) -> FeaturesConfig {
    match figment.extract::<FeaturesConfig>() {
        Ok(config) => {
            debug!("Enabled features: {:?}", config.enabled);
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to read feature configuration, continuing with no features");
            FeaturesConfig::default()
        }
    }
}
