//! Repository branches.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::payload::PayloadCommit;

/// A branch as reported by the branches endpoint.
///
/// `protected` defaults to `true` when the server omits it, so a
/// missing field never makes a protected branch look writable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub commit: Option<PayloadCommit>,
    #[serde(
        default = "de::default_true",
        deserialize_with = "de::lenient_bool_true"
    )]
    pub protected: bool,
    #[serde(default, deserialize_with = "de::lenient")]
    pub user_can_push: bool,
    #[serde(default, deserialize_with = "de::lenient")]
    pub user_can_merge: bool,
}

#[cfg(test)]
#[path = "branch_tests.rs"]
mod tests;
