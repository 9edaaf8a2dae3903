use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::de;
use crate::user::User;

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// A set of repository permissions.
///
/// The three flags are independent; any combination is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    #[serde(default, deserialize_with = "de::lenient")]
    pub admin: bool,

    #[serde(default, deserialize_with = "de::lenient")]
    pub pull: bool,

    #[serde(default, deserialize_with = "de::lenient")]
    pub push: bool,
}

/// A Gitea repository.
///
/// `parent` is populated when the repository is a fork or a mirror.
/// When the wire payload omits `name` but carries `full_name`, the name is
/// derived from the segment after the last `/` during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repository {
    /// The repository identifier, `-1` when unknown.
    pub id: i64,

    /// The full name, `owner/name`.
    pub full_name: String,

    /// The repository name.
    pub name: String,

    /// The repository description.
    pub description: String,

    /// The name of the default branch.
    pub default_branch: String,

    /// The HTTP-based URL for cloning this repository.
    pub clone_url: Option<String>,

    /// The SSH-based URL for cloning this repository.
    pub ssh_url: Option<String>,

    /// The Gitea web URL of this repository.
    pub html_url: Option<String>,

    /// The URL of the repository website.
    pub website: Option<String>,

    /// The date the repository was created.
    pub created_at: Option<DateTime<Utc>>,

    /// The date the repository was last updated.
    pub updated_at: Option<DateTime<Utc>>,

    /// Whether this repository is empty. The wire defaults this to `true`.
    pub empty: bool,

    /// Whether this repository is a fork.
    pub fork: bool,

    /// Whether this repository is a mirror.
    pub mirror: bool,

    /// Whether this repository is private.
    pub private: bool,

    /// The repository size, in kilobytes.
    pub size: i64,

    /// The number of forks of this repository.
    pub forks_count: i64,

    /// The number of open issues of this repository.
    pub open_issues_count: i64,

    /// The number of stars of this repository.
    pub stars_count: i64,

    /// The number of watchers of this repository.
    pub watchers_count: i64,

    /// The repository owner.
    pub owner: Option<User>,

    /// The parent repository, if this repository is a fork or a mirror.
    pub parent: Option<Box<Repository>>,

    /// The permissions the authenticated user holds on this repository.
    pub permissions: Option<Permission>,
}

impl<'de> Deserialize<'de> for Repository {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default = "de::default_id", deserialize_with = "de::lenient_id")]
            id: i64,
            #[serde(default, deserialize_with = "de::lenient")]
            full_name: String,
            #[serde(default, deserialize_with = "de::lenient")]
            name: String,
            #[serde(default, deserialize_with = "de::lenient")]
            description: String,
            #[serde(default, deserialize_with = "de::lenient")]
            default_branch: String,
            #[serde(default, deserialize_with = "de::lenient")]
            clone_url: Option<String>,
            #[serde(default, deserialize_with = "de::lenient")]
            ssh_url: Option<String>,
            #[serde(default, deserialize_with = "de::lenient")]
            html_url: Option<String>,
            #[serde(default, deserialize_with = "de::lenient")]
            website: Option<String>,
            #[serde(default, deserialize_with = "de::lenient")]
            created_at: Option<DateTime<Utc>>,
            #[serde(default, deserialize_with = "de::lenient")]
            updated_at: Option<DateTime<Utc>>,
            #[serde(default = "de::default_true", deserialize_with = "de::lenient_bool_true")]
            empty: bool,
            #[serde(default, deserialize_with = "de::lenient")]
            fork: bool,
            #[serde(default, deserialize_with = "de::lenient")]
            mirror: bool,
            #[serde(default, deserialize_with = "de::lenient")]
            private: bool,
            #[serde(default, deserialize_with = "de::lenient")]
            size: i64,
            #[serde(default, deserialize_with = "de::lenient")]
            forks_count: i64,
            #[serde(default, deserialize_with = "de::lenient")]
            open_issues_count: i64,
            #[serde(default, deserialize_with = "de::lenient")]
            stars_count: i64,
            #[serde(default, deserialize_with = "de::lenient")]
            watchers_count: i64,
            #[serde(default, deserialize_with = "de::lenient")]
            owner: Option<User>,
            #[serde(default, deserialize_with = "de::lenient")]
            parent: Option<Box<Repository>>,
            #[serde(default, deserialize_with = "de::lenient")]
            permissions: Option<Permission>,
        }

        let wire = Wire::deserialize(deserializer)?;

        // Derive the short name from the full name when the payload has
        // no explicit `name`.
        let name = if wire.name.is_empty() && wire.full_name.contains('/') {
            wire.full_name
                .rsplit('/')
                .next()
                .unwrap_or_default()
                .to_string()
        } else {
            wire.name
        };

        Ok(Repository {
            id: wire.id,
            full_name: wire.full_name,
            name,
            description: wire.description,
            default_branch: wire.default_branch,
            clone_url: wire.clone_url,
            ssh_url: wire.ssh_url,
            html_url: wire.html_url,
            website: wire.website,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            empty: wire.empty,
            fork: wire.fork,
            mirror: wire.mirror,
            private: wire.private,
            size: wire.size,
            forks_count: wire.forks_count,
            open_issues_count: wire.open_issues_count,
            stars_count: wire.stars_count,
            watchers_count: wire.watchers_count,
            owner: wire.owner,
            parent: wire.parent,
            permissions: wire.permissions,
        })
    }
}
