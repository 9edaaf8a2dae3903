use serde::{Deserialize, Serialize};

use crate::de;

#[cfg(test)]
#[path = "user_tests.rs"]
mod tests;

/// A Gitea user or repository owner.
///
/// The same shape serves as `Repository.owner` and as the `pusher`/`sender`
/// of a [`crate::PushEvent`]. The mail address is normalized to lowercase
/// when the value is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// The user identifier, `-1` when unknown.
    #[serde(default = "de::default_id", deserialize_with = "de::lenient_id")]
    pub id: i64,

    /// The name of the Gitea account.
    #[serde(default, deserialize_with = "de::lenient")]
    pub login: String,

    /// The full name.
    #[serde(default, deserialize_with = "de::lenient")]
    pub full_name: String,

    /// The mail address, lowercased at parse time.
    #[serde(default, deserialize_with = "de::lenient_email")]
    pub email: String,

    /// The URL of the avatar image.
    #[serde(default, deserialize_with = "de::lenient")]
    pub avatar_url: Option<String>,

    /// The user locale.
    #[serde(default, deserialize_with = "de::lenient")]
    pub language: String,

    /// Whether the account has administrator rights.
    #[serde(default, deserialize_with = "de::lenient")]
    pub is_admin: bool,

    /// The username of the account or organization.
    #[serde(default, deserialize_with = "de::lenient")]
    pub username: String,
}
