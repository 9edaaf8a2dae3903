//! Time tracked against issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::de;

/// A tracked-time entry on an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedTime {
    #[serde(default = "de::default_id", deserialize_with = "de::lenient_id")]
    pub id: i64,
    /// Tracked duration in seconds.
    #[serde(default, deserialize_with = "de::lenient")]
    pub time: i64,
    #[serde(default, deserialize_with = "de::lenient")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default = "de::default_id", deserialize_with = "de::lenient_id")]
    pub issue_id: i64,
    #[serde(default = "de::default_id", deserialize_with = "de::lenient_id")]
    pub user_id: i64,
}

#[cfg(test)]
#[path = "tracked_time_tests.rs"]
mod tests;
