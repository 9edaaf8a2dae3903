use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::de;

#[cfg(test)]
#[path = "organization_tests.rs"]
mod tests;

/// A Gitea organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// The organization identifier, `-1` when unknown.
    #[serde(default = "de::default_id", deserialize_with = "de::lenient_id")]
    pub id: i64,

    /// The username of the organization.
    #[serde(default, deserialize_with = "de::lenient")]
    pub username: String,

    /// The visibility of the organization: `private`, `public` or `limited`.
    /// Defaults to `private` when absent or malformed.
    #[serde(default = "default_visibility", deserialize_with = "lenient_visibility")]
    pub visibility: String,

    /// The organization description.
    #[serde(default, deserialize_with = "de::lenient")]
    pub description: String,

    /// The organization's full name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub full_name: String,

    /// The organization location.
    #[serde(default, deserialize_with = "de::lenient")]
    pub location: String,

    /// The website URL of the organization.
    #[serde(default, deserialize_with = "de::lenient")]
    pub website: Option<String>,

    /// A URL pointing to the organization's avatar.
    #[serde(default, deserialize_with = "de::lenient")]
    pub avatar_url: Option<String>,
}

fn default_visibility() -> String {
    "private".to_string()
}

fn lenient_visibility<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(default_visibility))
}
