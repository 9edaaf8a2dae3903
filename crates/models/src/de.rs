//! Lenient deserialization helpers shared by every model.
//!
//! Gitea payloads vary across server versions: any field may be absent,
//! `null`, or carry an unexpected type. Model fields deserialize through
//! these helpers so a malformed field substitutes its documented default
//! instead of failing the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Default identifier for records whose `id` was absent or malformed.
pub(crate) fn default_id() -> i64 {
    -1
}

pub(crate) fn default_true() -> bool {
    true
}

/// Deserializes a `T`, falling back to `T::default()` when the wire value
/// is `null` or of the wrong type.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Identifier variant of [`lenient`]: `null` and malformed values map to `-1`.
pub(crate) fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_i64().unwrap_or(-1))
}

/// Boolean variant of [`lenient`] whose fallback is `true`. Used by
/// `Repository.empty` and `Branch.protected`, which the wire defaults on.
pub(crate) fn lenient_bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(true))
}

/// Mail addresses are normalized to lowercase at construction time.
pub(crate) fn lenient_email<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .map(|email| email.to_lowercase())
        .unwrap_or_default())
}
