//! # Gitea API Models
//!
//! Data models for the Gitea REST API (v1) and its push-event webhooks.
//!
//! Every model deserializes leniently: a recognized field that is absent,
//! `null`, or carries an unexpected type falls back to a documented default
//! (empty string for text, `-1` for identifiers, `false` for most flags,
//! `0` for counts, `None` for optional nested objects and URLs). Unknown
//! keys are ignored. Serialization always writes the full field set using
//! the wire's snake_case names, so a value obtained from
//! [`serde_json::from_value`] round-trips unchanged.
//!
//! The [`webhook`] module validates inbound push-event deliveries (method,
//! content type, body, HMAC-SHA256 signature) before the payload is trusted
//! and parsed into a [`PushEvent`].
//!
//! ## Example
//!
//! ```rust
//! use gitea_api_models::{webhook, PushEvent};
//!
//! fn handle_delivery(body: &str, signature: &str, secret: &str) -> Option<PushEvent> {
//!     let request = webhook::WebhookRequest {
//!         method: "POST",
//!         content_type: Some("application/json"),
//!         signature: Some(signature),
//!         body,
//!     };
//!     webhook::validate_request(&request, secret, false).ok()?;
//!     serde_json::from_str(body).ok()
//! }
//! ```

mod de;

pub mod branch;
pub mod organization;
pub mod payload;
pub mod push_event;
pub mod repository;
pub mod status;
pub mod tag;
pub mod team;
pub mod tracked_time;
pub mod user;
pub mod version;
pub mod webhook;

pub use branch::Branch;
pub use organization::Organization;
pub use payload::{PayloadCommit, PayloadCommitVerification, PayloadUser};
pub use push_event::PushEvent;
pub use repository::{Permission, Repository};
pub use status::StatusState;
pub use tag::{Tag, TagCommit};
pub use team::{Team, TeamPermission};
pub use tracked_time::TrackedTime;
pub use user::User;
pub use version::ServerVersion;
pub use webhook::{WebhookError, WebhookRequest};
