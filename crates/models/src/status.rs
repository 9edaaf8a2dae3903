//! Commit status states.

use serde::{Deserialize, Serialize};

/// The state of a commit status check.
///
/// Unlike most wire fields this one deserializes strictly; a status
/// outside the known set is a server bug worth surfacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    #[default]
    Pending,
    Success,
    Error,
    Failure,
    Warning,
}

impl StatusState {
    /// Parses a status string, returning `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(StatusState::Pending),
            "success" => Some(StatusState::Success),
            "error" => Some(StatusState::Error),
            "failure" => Some(StatusState::Failure),
            "warning" => Some(StatusState::Warning),
            _ => None,
        }
    }

    /// The wire representation of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusState::Pending => "pending",
            StatusState::Success => "success",
            StatusState::Error => "error",
            StatusState::Failure => "failure",
            StatusState::Warning => "warning",
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
