//! Organization endpoints.

use gitea_api_models::Organization;
use tracing::warn;
use urlencoding::encode;

use crate::api::fetch_json;
use crate::requester::Requester;

/// Organization lookups.
#[derive(Debug, Clone)]
pub struct Organizations {
    requester: Requester,
}

impl Organizations {
    pub(crate) fn new(requester: Requester) -> Self {
        Organizations { requester }
    }

    /// Looks up an organization by its username.
    pub async fn get_by_username(&self, username: &str) -> Option<Organization> {
        let route = format!("orgs/{}", encode(username));
        match fetch_json(&self.requester, &route, &[]).await {
            Ok(organization) => Some(organization),
            Err(e) => {
                warn!(error = %e, username, "organization lookup failed");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "organizations_tests.rs"]
mod tests;
