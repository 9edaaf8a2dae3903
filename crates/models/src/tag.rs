//! Repository tags.

use serde::{Deserialize, Serialize};

use crate::de;

/// The commit a tag points at, reduced to its hash and API URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagCommit {
    #[serde(default, deserialize_with = "de::lenient")]
    pub sha: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub url: Option<String>,
}

/// A tag as reported by the tags endpoint.
///
/// Tag ids are opaque strings on the wire, not numeric ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub tarball_url: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub zipball_url: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub commit: TagCommit,
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
