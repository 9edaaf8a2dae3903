use super::*;
use serde_json::json;

#[test]
fn test_payload_commit_deserialization() {
    let commit: PayloadCommit = serde_json::from_value(json!({
        "id": "f00dcafe",
        "message": "Fix widget alignment\n",
        "url": "https://git.example.com/acme/widgets/commit/f00dcafe",
        "author": {
            "email": "Jane@Example.COM",
            "name": "Jane Doe",
            "username": "jane"
        },
        "committer": {
            "email": "jane@example.com",
            "name": "Jane Doe",
            "username": "jane"
        },
        "timestamp": "2024-03-01T12:30:00Z",
        "verification": {
            "verified": true,
            "payload": "tree ...",
            "reason": "gpg key matches",
            "signature": "-----BEGIN PGP SIGNATURE-----"
        }
    }))
    .expect("Failed to deserialize PayloadCommit");

    assert_eq!(commit.id, "f00dcafe");
    assert_eq!(commit.message, "Fix widget alignment\n");

    let author = commit.author.expect("Commit should carry an author");
    assert_eq!(author.email, "jane@example.com");
    assert_eq!(author.username, "jane");

    let timestamp = commit.timestamp.expect("Commit should carry a timestamp");
    assert_eq!(timestamp.to_rfc3339(), "2024-03-01T12:30:00+00:00");

    let verification = commit
        .verification
        .expect("Commit should carry verification state");
    assert!(verification.verified);
    assert_eq!(verification.reason, "gpg key matches");
}

#[test]
fn test_payload_commit_empty_map_yields_defaults() {
    let commit: PayloadCommit =
        serde_json::from_value(json!({})).expect("Failed to deserialize PayloadCommit");

    assert_eq!(commit.id, "");
    assert_eq!(commit.message, "");
    assert_eq!(commit.url, None);
    assert_eq!(commit.author, None);
    assert_eq!(commit.committer, None);
    assert_eq!(commit.timestamp, None);
    assert_eq!(commit.verification, None);
}

#[test]
fn test_payload_user_email_is_lowercased() {
    let user: PayloadUser = serde_json::from_value(json!({"email": "Ops@ACME.example"}))
        .expect("Failed to deserialize PayloadUser");
    assert_eq!(user.email, "ops@acme.example");
}

#[test]
fn test_payload_commit_malformed_timestamp_becomes_none() {
    let commit: PayloadCommit =
        serde_json::from_value(json!({"id": "abc", "timestamp": "yesterday"}))
            .expect("Failed to deserialize PayloadCommit");
    assert_eq!(commit.id, "abc");
    assert_eq!(commit.timestamp, None);
}

#[test]
fn test_payload_commit_round_trip() {
    let original: PayloadCommit = serde_json::from_value(json!({
        "id": "abc123",
        "message": "Release v2",
        "author": {"email": "rel@example.com", "name": "Releaser", "username": "rel"},
        "timestamp": "2024-06-15T08:00:00Z"
    }))
    .expect("Failed to deserialize PayloadCommit");

    let serialized = serde_json::to_value(&original).expect("Failed to serialize PayloadCommit");
    let restored: PayloadCommit =
        serde_json::from_value(serialized).expect("Failed to deserialize PayloadCommit");
    assert_eq!(restored, original);
}
