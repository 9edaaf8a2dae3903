//! Low level HTTP plumbing shared by every endpoint group.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response};
use tracing::debug;

use crate::errors::Error;

/// Body of a write request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// A JSON value serialized as the request body.
    Json(serde_json::Value),
    /// A preassembled string sent verbatim.
    Raw(String),
}

impl Default for RequestBody {
    fn default() -> Self {
        RequestBody::Json(serde_json::json!({}))
    }
}

impl From<serde_json::Value> for RequestBody {
    fn from(value: serde_json::Value) -> Self {
        RequestBody::Json(value)
    }
}

impl From<String> for RequestBody {
    fn from(text: String) -> Self {
        RequestBody::Raw(text)
    }
}

impl From<()> for RequestBody {
    fn from(_: ()) -> Self {
        RequestBody::default()
    }
}

/// Issues authenticated HTTP requests against a Gitea server's v1 API.
///
/// Every request carries `Accept: application/json` and, when a token
/// was configured, an `Authorization: token <token>` header; write
/// requests add `Content-Type: application/json`. Caller-supplied
/// headers are merged over these defaults, the caller's value winning.
/// Routes are resolved under the server's `/api/v1/` prefix.
#[derive(Debug, Clone)]
pub struct Requester {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl Requester {
    /// Creates a requester for the server at `base_url`.
    ///
    /// The URL is the server root, e.g. `https://git.example.com`; any
    /// trailing slashes are stripped. An empty `token` disables
    /// authentication instead of sending an empty header.
    pub fn new(base_url: &str, token: &str) -> Result<Self, Error> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::Config("base URL must not be empty".to_string()));
        }

        let token = token.trim();
        let auth_header = if token.is_empty() {
            None
        } else {
            let mut value = HeaderValue::from_str(&format!("token {token}")).map_err(|_| {
                Error::Config("token contains characters not valid in a header".to_string())
            })?;
            value.set_sensitive(true);
            Some(value)
        };

        Ok(Requester {
            client: reqwest::Client::new(),
            base_url: trimmed.to_string(),
            auth_header,
        })
    }

    /// The server root this requester talks to, without the API prefix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an authorization token was configured.
    pub fn has_token(&self) -> bool {
        self.auth_header.is_some()
    }

    fn url_for(&self, route: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, route.trim_start_matches('/'))
    }

    /// Sends a GET request with the given query parameters and extra headers.
    pub async fn get(
        &self,
        route: &str,
        params: &[(&str, String)],
        headers: &[(&str, &str)],
    ) -> Result<Response, Error> {
        self.send(Method::GET, route, params, headers, None).await
    }

    /// Sends a POST request with a JSON or raw body. `()` sends the
    /// default `{}` body.
    pub async fn post(
        &self,
        route: &str,
        body: impl Into<RequestBody>,
        headers: &[(&str, &str)],
    ) -> Result<Response, Error> {
        self.send(Method::POST, route, &[], headers, Some(body.into()))
            .await
    }

    /// Sends a PUT request with a JSON or raw body. `()` sends the
    /// default `{}` body.
    pub async fn put(
        &self,
        route: &str,
        body: impl Into<RequestBody>,
        headers: &[(&str, &str)],
    ) -> Result<Response, Error> {
        self.send(Method::PUT, route, &[], headers, Some(body.into()))
            .await
    }

    /// Sends a DELETE request.
    pub async fn delete(&self, route: &str, headers: &[(&str, &str)]) -> Result<Response, Error> {
        self.send(Method::DELETE, route, &[], headers, None).await
    }

    async fn send(
        &self,
        method: Method,
        route: &str,
        params: &[(&str, String)],
        headers: &[(&str, &str)],
        body: Option<RequestBody>,
    ) -> Result<Response, Error> {
        let url = self.url_for(route);
        debug!(method = %method, url = %url, "sending API request");

        let mut header_map = HeaderMap::new();
        header_map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(header) = &self.auth_header {
            header_map.insert(AUTHORIZATION, header.clone());
        }
        if body.is_some() {
            header_map.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        // Caller headers replace the defaults.
        for (name, value) in headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| Error::Config(format!("'{name}' is not a valid header name")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| Error::Config(format!("header '{name}' has an invalid value")))?;
            header_map.insert(name, value);
        }

        let mut request = self.client.request(method, &url).headers(header_map);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(body) = body {
            request = match body {
                RequestBody::Json(value) => request.body(serde_json::to_vec(&value)?),
                RequestBody::Raw(text) => request.body(text),
            };
        }

        Ok(request.send().await?)
    }
}

/// Converts a non-success response into [`Error::Api`], keeping the body
/// for the error message.
pub(crate) async fn ensure_success(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
#[path = "requester_tests.rs"]
mod tests;
