use serde::{Deserialize, Serialize};

/// A guild as carried inside other API payloads.
///
/// The API frequently sends partial objects: only `id` and `name` are
/// guaranteed, everything else defaults when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guild {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub splash: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub vanity_url_code: Option<String>,
    #[serde(default)]
    pub verification_level: Option<i64>,
}
