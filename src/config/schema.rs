use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesConfig {
    /// Feature ids to activate, in pipeline order.
    #[serde(default, deserialize_with = "lenient_id_list")]
    pub enabled: Vec<String>,
}

impl FeaturesConfig {
    pub fn with_enabled<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: ids.into_iter().map(Into::into).collect(),
        }
    }
}

// Accepts any shape for `enabled` and keeps only the string entries, so a
// malformed registry never prevents the host from starting.
fn lenient_id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(id_entries(value))
}

fn id_entries(value: serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .filter_map(|entry| match entry {
                serde_json::Value::String(id) => Some(id),
                other => {
                    warn!(entry = %other, "Ignoring non-string entry in enabled feature list");
                    None
                }
            })
            .collect(),
        other => {
            warn!(value = %other, "Enabled feature list is not a sequence, no features activated");
            Vec::new()
        }
    }
}
