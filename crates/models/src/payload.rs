//! Commit payloads embedded in webhook events and branch listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de;

/// Author or committer identity attached to a commit payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadUser {
    #[serde(default, deserialize_with = "de::lenient_email")]
    pub email: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub username: String,
}

/// GPG verification state of a commit payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadCommitVerification {
    #[serde(default, deserialize_with = "de::lenient")]
    pub verified: bool,
    #[serde(default, deserialize_with = "de::lenient")]
    pub payload: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub reason: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub signature: String,
}

/// A single commit as carried inside a push event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadCommit {
    #[serde(default, deserialize_with = "de::lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub message: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub author: Option<PayloadUser>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub committer: Option<PayloadUser>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub verification: Option<PayloadCommitVerification>,
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
