use super::*;
use serde_json::json;

fn sample_event() -> serde_json::Value {
    json!({
        "after": "d2e3f4a5",
        "before": "a1b2c3d4",
        "ref": "refs/heads/main",
        "compare_url": "https://git.example.com/acme/widgets/compare/a1b2c3d4...d2e3f4a5",
        "secret": "",
        "pusher": {"id": 7, "login": "jane", "email": "jane@example.com"},
        "sender": {"id": 7, "login": "jane", "email": "jane@example.com"},
        "repository": {
            "id": 11,
            "full_name": "acme/widgets",
            "default_branch": "main",
            "empty": false,
            "private": true
        },
        "commits": [
            {
                "id": "d2e3f4a5",
                "message": "Tighten widget tolerances",
                "author": {"email": "jane@example.com", "name": "Jane", "username": "jane"},
                "timestamp": "2024-03-01T12:30:00Z"
            }
        ]
    })
}

#[test]
fn test_push_event_deserialization() {
    let event: PushEvent =
        serde_json::from_value(sample_event()).expect("Failed to deserialize PushEvent");

    assert_eq!(event.git_ref, "refs/heads/main");
    assert_eq!(event.after, "d2e3f4a5");
    assert_eq!(event.before, "a1b2c3d4");
    assert_eq!(event.commits.len(), 1);
    assert_eq!(event.commits[0].message, "Tighten widget tolerances");

    let pusher = event.pusher.expect("Event should carry a pusher");
    assert_eq!(pusher.login, "jane");

    let repository = event.repository.expect("Event should carry a repository");
    assert_eq!(repository.full_name, "acme/widgets");
    assert_eq!(repository.name, "widgets");
    assert!(!repository.empty);
}

#[test]
fn test_push_event_empty_map_yields_defaults() {
    let event: PushEvent =
        serde_json::from_value(json!({})).expect("Failed to deserialize PushEvent");

    assert_eq!(event.git_ref, "");
    assert_eq!(event.after, "");
    assert_eq!(event.pusher, None);
    assert_eq!(event.repository, None);
    assert!(event.commits.is_empty());
}

#[test]
fn test_push_event_ref_field_renamed_on_wire() {
    let event: PushEvent = serde_json::from_value(json!({"ref": "refs/tags/v1.0"}))
        .expect("Failed to deserialize PushEvent");
    assert_eq!(event.git_ref, "refs/tags/v1.0");

    let serialized = serde_json::to_value(&event).expect("Failed to serialize PushEvent");
    assert_eq!(serialized["ref"], "refs/tags/v1.0");
    assert!(serialized.get("git_ref").is_none());
}

#[test]
fn test_push_event_malformed_commits_become_empty() {
    let event: PushEvent = serde_json::from_value(json!({"commits": "none"}))
        .expect("Failed to deserialize PushEvent");
    assert!(event.commits.is_empty());
}

#[test]
fn test_push_event_round_trip() {
    let original: PushEvent =
        serde_json::from_value(sample_event()).expect("Failed to deserialize PushEvent");

    let serialized = serde_json::to_value(&original).expect("Failed to serialize PushEvent");
    let restored: PushEvent =
        serde_json::from_value(serialized).expect("Failed to deserialize PushEvent");
    assert_eq!(restored, original);
}
