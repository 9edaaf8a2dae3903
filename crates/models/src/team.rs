//! Organization teams and their permission levels.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::de;

/// The access level a team grants over its repositories.
///
/// Unknown or malformed values coerce to [`TeamPermission::None`] so a
/// server speaking a newer dialect never fails the whole payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TeamPermission {
    #[default]
    None,
    Read,
    Write,
    Admin,
    Owner,
}

impl TeamPermission {
    /// Parses a permission string, falling back to `None` for anything
    /// unrecognised.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "read" => TeamPermission::Read,
            "write" => TeamPermission::Write,
            "admin" => TeamPermission::Admin,
            "owner" => TeamPermission::Owner,
            _ => TeamPermission::None,
        }
    }

    /// The wire representation of this permission level.
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamPermission::None => "none",
            TeamPermission::Read => "read",
            TeamPermission::Write => "write",
            TeamPermission::Admin => "admin",
            TeamPermission::Owner => "owner",
        }
    }
}

impl Serialize for TeamPermission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TeamPermission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .map(TeamPermission::parse_or_default)
            .unwrap_or_default())
    }
}

/// A team inside an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default = "de::default_id", deserialize_with = "de::lenient_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "de::lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "de::lenient")]
    pub description: String,
    #[serde(default)]
    pub permission: TeamPermission,
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod tests;
