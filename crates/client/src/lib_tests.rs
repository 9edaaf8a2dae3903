use super::*;
use gitea_api_models::webhook::signature_for;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LONG_TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

#[test]
fn test_new_rejects_empty_base_url() {
    let error = Client::new("", LONG_TOKEN).expect_err("Empty base URL should be rejected");
    assert!(matches!(error, Error::Config(_)));
}

#[test]
fn test_base_url_is_normalized() {
    let client =
        Client::new("https://git.example.com/", LONG_TOKEN).expect("Failed to build client");
    assert_eq!(client.base_url(), "https://git.example.com");
}

#[test]
fn test_check_auth_token_accepts_full_length_token() {
    let client =
        Client::new("https://git.example.com", LONG_TOKEN).expect("Failed to build client");
    assert!(client.check_auth_token());
}

#[test]
fn test_check_auth_token_rejects_empty_token() {
    let client = Client::new("https://git.example.com", "").expect("Failed to build client");
    assert!(!client.check_auth_token());
}

#[test]
fn test_check_auth_token_rejects_short_token() {
    let client = Client::new("https://git.example.com", "short").expect("Failed to build client");
    assert!(!client.check_auth_token());
}

#[test]
fn test_validate_push_event_uses_stored_secret() {
    let body = r#"{"ref":"refs/heads/main"}"#;
    let signature = signature_for(body, "hook-secret");
    let client = Client::new("https://git.example.com", LONG_TOKEN)
        .expect("Failed to build client")
        .with_push_event_secret("hook-secret");

    let request = WebhookRequest {
        method: "POST",
        content_type: Some("application/json"),
        signature: Some(&signature),
        body,
    };
    assert_eq!(client.validate_push_event(&request), Ok(()));

    let wrong_secret_client = Client::new("https://git.example.com", LONG_TOKEN)
        .expect("Failed to build client")
        .with_push_event_secret("other-secret");
    assert_eq!(
        wrong_secret_client.validate_push_event(&request),
        Err(WebhookError::SignatureMismatch)
    );
}

#[tokio::test]
async fn test_server_version_decodes_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": "1.21.4"})))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri(), LONG_TOKEN).expect("Failed to build client");
    let version = client
        .server_version()
        .await
        .expect("Version should be reported");

    assert_eq!(version.version, "1.21.4");
}

#[tokio::test]
async fn test_server_version_failure_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/version"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri(), LONG_TOKEN).expect("Failed to build client");
    assert!(client.server_version().await.is_none());
}
