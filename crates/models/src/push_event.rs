//! The push webhook event body.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::payload::PayloadCommit;
use crate::repository::Repository;
use crate::user::User;

/// The JSON body delivered with an `X-Gitea-Event: push` webhook.
///
/// Parse it only after the request has passed
/// [`validate_request`](crate::webhook::validate_request).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushEvent {
    #[serde(default, deserialize_with = "de::lenient")]
    pub after: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub before: String,
    /// The full git reference that was pushed, e.g. `refs/heads/main`.
    #[serde(rename = "ref", default, deserialize_with = "de::lenient")]
    pub git_ref: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub compare_url: Option<String>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub secret: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub pusher: Option<User>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub sender: Option<User>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub repository: Option<Repository>,
    #[serde(default, deserialize_with = "de::lenient")]
    pub commits: Vec<PayloadCommit>,
}

#[cfg(test)]
#[path = "push_event_tests.rs"]
mod tests;
