use serde::{Deserialize, Serialize};

/// Versions reported by a StreamPipes installation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Versions {
    pub backend_version: String,
}
