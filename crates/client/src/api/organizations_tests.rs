use super::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn organizations_for(server: &MockServer) -> Organizations {
    let requester = Requester::new(&server.uri(), "test-token").expect("Failed to build requester");
    Organizations::new(requester)
}

#[tokio::test]
async fn test_get_by_username_decodes_organization() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 33,
            "username": "acme",
            "visibility": "public",
            "full_name": "ACME Corporation"
        })))
        .mount(&server)
        .await;

    let organization = organizations_for(&server)
        .get_by_username("acme")
        .await
        .expect("Organization should be found");

    assert_eq!(organization.id, 33);
    assert_eq!(organization.username, "acme");
    assert_eq!(organization.visibility, "public");
}

#[tokio::test]
async fn test_get_by_username_missing_organization_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/orgs/ghosts"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let organization = organizations_for(&server).get_by_username("ghosts").await;
    assert!(organization.is_none());
}
