//! Server version reporting.

use serde::{Deserialize, Serialize};

use crate::de;

/// Response body of the `/version` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerVersion {
    #[serde(default, deserialize_with = "de::lenient")]
    pub version: String,
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
