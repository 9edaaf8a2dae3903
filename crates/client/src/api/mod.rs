//! Typed endpoint groups.
//!
//! Endpoint methods follow a shared contract: build the route, issue the
//! request, require a success status, and decode with the lenient models.
//! Server and transport failures never cross the endpoint boundary; they
//! are logged and reported as an empty collection or `None` so callers
//! can stay on the happy path.

pub mod branches;
pub mod organizations;
pub mod repositories;
pub mod tags;

use serde::de::DeserializeOwned;

use crate::errors::Error;
use crate::requester::{ensure_success, Requester};

/// Joins path segments into a route, percent-encoding each segment while
/// keeping the separators intact.
pub(crate) fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Issues a GET and decodes the success response body as JSON.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    requester: &Requester,
    route: &str,
    params: &[(&str, String)],
) -> Result<T, Error> {
    let response = requester.get(route, params, &[]).await?;
    let response = ensure_success(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Issues a GET and returns the raw bytes of the success response.
pub(crate) async fn fetch_bytes(
    requester: &Requester,
    route: &str,
    params: &[(&str, String)],
) -> Result<Vec<u8>, Error> {
    let response = requester.get(route, params, &[]).await?;
    let response = ensure_success(response).await?;
    Ok(response.bytes().await?.to_vec())
}
