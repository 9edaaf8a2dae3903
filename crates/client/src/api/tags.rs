//! Tag endpoints.

use gitea_api_models::Tag;
use tracing::warn;
use urlencoding::encode;

use crate::api::fetch_json;
use crate::requester::Requester;

/// Tag listings.
#[derive(Debug, Clone)]
pub struct Tags {
    requester: Requester,
}

impl Tags {
    pub(crate) fn new(requester: Requester) -> Self {
        Tags { requester }
    }

    /// Lists the tags of a repository.
    pub async fn from_repository(&self, owner: &str, repo: &str) -> Vec<Tag> {
        let route = format!("repos/{}/{}/tags", encode(owner), encode(repo));
        match fetch_json(&self.requester, &route, &[]).await {
            Ok(tags) => tags,
            Err(e) => {
                warn!(error = %e, owner, repo, "tag listing failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
