//! # Gitea API Client
//!
//! Async client for the Gitea REST API (v1), built on the lenient data
//! models from `gitea_api_models`.
//!
//! A [`Client`] owns one authenticated [`Requester`] and hands out typed
//! endpoint groups that share it. Endpoint methods never surface server
//! or transport errors; they log the cause and return an empty collection
//! or `None`, so callers check return values instead of matching errors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gitea_api_client::Client;
//!
//! # async fn example() -> Result<(), gitea_api_client::Error> {
//! let client = Client::new("https://git.example.com", "a-forty-character-personal-token....")?;
//!
//! if let Some(repository) = client.repositories().get_by_name("acme", "widgets").await {
//!     println!("default branch: {}", repository.default_branch);
//! }
//! for branch in client.branches().from_repository("acme", "widgets").await {
//!     println!("{} (protected: {})", branch.name, branch.protected);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod errors;
pub mod pagination;
pub mod requester;

use gitea_api_models::webhook::{self, WebhookError, WebhookRequest};
use gitea_api_models::ServerVersion;
use tracing::warn;

use crate::api::branches::Branches;
use crate::api::organizations::Organizations;
use crate::api::repositories::Repositories;
use crate::api::tags::Tags;

pub use crate::errors::Error;
pub use crate::pagination::Pagination;
pub use crate::requester::{RequestBody, Requester};

/// Tokens shorter than this cannot be real Gitea access tokens.
const MIN_TOKEN_LENGTH: usize = 40;

/// An authenticated connection to one Gitea server.
#[derive(Debug, Clone)]
pub struct Client {
    requester: Requester,
    auth_token: String,
    push_event_secret: Option<String>,
}

impl Client {
    /// Creates a client for the server at `base_url`.
    ///
    /// An empty `auth_token` leaves the client unauthenticated, which
    /// limits it to whatever the server exposes anonymously.
    pub fn new(base_url: &str, auth_token: &str) -> Result<Self, Error> {
        let requester = Requester::new(base_url, auth_token)?;
        Ok(Client {
            requester,
            auth_token: auth_token.trim().to_string(),
            push_event_secret: None,
        })
    }

    /// Stores a webhook secret for [`validate_push_event`](Client::validate_push_event).
    pub fn with_push_event_secret(mut self, secret: &str) -> Self {
        self.push_event_secret = Some(secret.to_string());
        self
    }

    /// The server root this client talks to.
    pub fn base_url(&self) -> &str {
        self.requester.base_url()
    }

    /// Checks that the configured token is plausibly a Gitea access token.
    ///
    /// Gitea tokens are 40 hexadecimal characters; anything shorter is
    /// rejected without a network round trip.
    pub fn check_auth_token(&self) -> bool {
        if self.auth_token.is_empty() {
            warn!("no authorization token is configured");
            return false;
        }
        if self.auth_token.len() < MIN_TOKEN_LENGTH {
            warn!(
                length = self.auth_token.len(),
                "authorization token is shorter than a Gitea access token"
            );
            return false;
        }
        true
    }

    /// Validates an inbound push-event delivery against the stored secret.
    ///
    /// Without a stored secret the signature is checked against the empty
    /// string, matching a webhook configured with no secret.
    pub fn validate_push_event(&self, request: &WebhookRequest<'_>) -> Result<(), WebhookError> {
        let secret = self.push_event_secret.as_deref().unwrap_or_default();
        webhook::validate_request(request, secret, false)
    }

    /// Asks the server for its version. `None` when the request fails.
    pub async fn server_version(&self) -> Option<ServerVersion> {
        match api::fetch_json(&self.requester, "version", &[]).await {
            Ok(version) => Some(version),
            Err(e) => {
                warn!(error = %e, "server version lookup failed");
                None
            }
        }
    }

    /// Repository lookups, search, and content downloads.
    pub fn repositories(&self) -> Repositories {
        Repositories::new(self.requester.clone())
    }

    /// Organization lookups.
    pub fn organizations(&self) -> Organizations {
        Organizations::new(self.requester.clone())
    }

    /// Branch listings.
    pub fn branches(&self) -> Branches {
        Branches::new(self.requester.clone())
    }

    /// Tag listings.
    pub fn tags(&self) -> Tags {
        Tags::new(self.requester.clone())
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
