use super::*;
use serde_json::json;

#[test]
fn test_server_version_deserialization() {
    let version: ServerVersion = serde_json::from_value(json!({"version": "1.21.4"}))
        .expect("Failed to deserialize ServerVersion");
    assert_eq!(version.version, "1.21.4");
}

#[test]
fn test_server_version_empty_map_yields_default() {
    let version: ServerVersion =
        serde_json::from_value(json!({})).expect("Failed to deserialize ServerVersion");
    assert_eq!(version.version, "");
}
