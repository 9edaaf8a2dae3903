use super::*;
use serde_json::json;

#[test]
fn test_organization_deserialization() {
    let org: Organization = serde_json::from_value(json!({
        "id": 33,
        "username": "acme",
        "visibility": "public",
        "description": "Widget makers",
        "full_name": "ACME Corporation",
        "location": "Toronto",
        "website": "https://acme.example.com",
        "avatar_url": "https://git.example.com/avatars/org/33"
    }))
    .expect("Failed to deserialize Organization");

    assert_eq!(org.id, 33);
    assert_eq!(org.username, "acme");
    assert_eq!(org.visibility, "public");
    assert_eq!(org.full_name, "ACME Corporation");
    assert_eq!(org.location, "Toronto");
    assert_eq!(org.website, Some("https://acme.example.com".to_string()));
}

#[test]
fn test_organization_empty_map_yields_defaults() {
    let org: Organization =
        serde_json::from_value(json!({})).expect("Failed to deserialize Organization");

    assert_eq!(org.id, -1);
    assert_eq!(org.username, "");
    assert_eq!(org.visibility, "private");
    assert_eq!(org.description, "");
    assert_eq!(org.website, None);
    assert_eq!(org.avatar_url, None);
}

#[test]
fn test_organization_malformed_visibility_defaults_to_private() {
    let org: Organization = serde_json::from_value(json!({"visibility": 7}))
        .expect("Failed to deserialize Organization");

    assert_eq!(org.visibility, "private");
}

#[test]
fn test_organization_round_trip() {
    let original: Organization = serde_json::from_value(json!({
        "username": "acme",
        "visibility": "limited",
        "description": "Widget makers"
    }))
    .expect("Failed to deserialize Organization");

    let serialized = serde_json::to_value(&original).expect("Failed to serialize Organization");
    assert_eq!(serialized["visibility"], "limited");
    assert!(serialized["website"].is_null());

    let restored: Organization =
        serde_json::from_value(serialized).expect("Failed to deserialize Organization");
    assert_eq!(restored, original);
}
