//! Webhook request validation.
//!
//! Gitea signs webhook deliveries with an HMAC-SHA256 of the raw request
//! body, keyed by the webhook secret, and sends the hex digest in the
//! `X-Gitea-Signature` header. [`validate_request`] runs the checks a
//! receiving endpoint must perform before trusting the body, in a fixed
//! order so callers get stable, specific errors.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex HMAC-SHA256 digest of the body.
pub const SIGNATURE_HEADER: &str = "X-Gitea-Signature";

/// Header carrying the unique delivery id.
pub const DELIVERY_HEADER: &str = "X-Gitea-Delivery";

/// Header naming the event type, e.g. `push`.
pub const EVENT_HEADER: &str = "X-Gitea-Event";

/// Errors that indicate why a webhook delivery was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WebhookError {
    /// The request used a method other than POST.
    #[error("webhook deliveries must be POST requests, got {0}")]
    InvalidMethod(String),

    /// The content type was missing or not `application/json`.
    #[error("webhook deliveries must have an application/json content type")]
    InvalidContentType,

    /// The request body was empty or whitespace only.
    #[error("webhook delivery body is empty")]
    EmptyBody,

    /// Signature validation was requested but no signature header was sent.
    #[error("webhook delivery is missing the {SIGNATURE_HEADER} header")]
    SignatureMissing,

    /// The signature header did not match the body digest.
    #[error("webhook signature does not match the request body")]
    SignatureMismatch,
}

/// The parts of an incoming HTTP request needed for validation.
///
/// Borrowed so callers can hand over slices of whatever request type
/// their web framework uses.
#[derive(Debug, Clone, Copy)]
pub struct WebhookRequest<'a> {
    /// The HTTP method, e.g. `"POST"`. Matched case-insensitively.
    pub method: &'a str,
    /// The `Content-Type` header value, if present.
    pub content_type: Option<&'a str>,
    /// The `X-Gitea-Signature` header value, if present.
    pub signature: Option<&'a str>,
    /// The raw request body, exactly as received.
    pub body: &'a str,
}

/// Validates a webhook delivery against the shared secret.
///
/// Checks run in order: method, content type, body presence, then the
/// HMAC signature. The first failing check is returned. Passing
/// `skip_signature_validation` drops the signature checks entirely,
/// which is only appropriate for local testing.
pub fn validate_request(
    request: &WebhookRequest<'_>,
    secret: &str,
    skip_signature_validation: bool,
) -> Result<(), WebhookError> {
    if !request.method.eq_ignore_ascii_case("POST") {
        return Err(WebhookError::InvalidMethod(request.method.to_string()));
    }

    let content_type = request
        .content_type
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default();
    if content_type != "application/json" {
        return Err(WebhookError::InvalidContentType);
    }

    if request.body.trim().is_empty() {
        return Err(WebhookError::EmptyBody);
    }

    if skip_signature_validation {
        return Ok(());
    }

    let signature = request.signature.ok_or(WebhookError::SignatureMissing)?;
    let expected = hex::decode(signature.trim()).map_err(|_| WebhookError::SignatureMismatch)?;

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(request.body.as_bytes());
    mac.verify_slice(&expected)
        .map_err(|_| WebhookError::SignatureMismatch)
}

/// Computes the hex signature Gitea would send for `body` under `secret`.
///
/// Useful for signing outbound test deliveries.
pub fn signature_for(body: &str, secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;
