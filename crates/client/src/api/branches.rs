//! Branch endpoints.

use gitea_api_models::Branch;
use tracing::warn;
use urlencoding::encode;

use crate::api::fetch_json;
use crate::requester::Requester;

/// Branch listings.
#[derive(Debug, Clone)]
pub struct Branches {
    requester: Requester,
}

impl Branches {
    pub(crate) fn new(requester: Requester) -> Self {
        Branches { requester }
    }

    /// Lists the branches of a repository.
    pub async fn from_repository(&self, owner: &str, repo: &str) -> Vec<Branch> {
        let route = format!("repos/{}/{}/branches", encode(owner), encode(repo));
        match fetch_json(&self.requester, &route, &[]).await {
            Ok(branches) => branches,
            Err(e) => {
                warn!(error = %e, owner, repo, "branch listing failed");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[path = "branches_tests.rs"]
mod tests;
