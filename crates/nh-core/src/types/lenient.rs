//! Field decoders that read what the API sends without failing the record.
//!
//! A value of the wrong JSON type decodes as `None` so the caller can fall
//! back to `N/A` for that one field.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::RemoteLocation;

/// Integer, or an integer in a string
pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}

/// String, with numbers and booleans rendered as text
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

/// Location object; anything that is not `{type, coordinates: [numbers]}` is `None`
pub fn location<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<RemoteLocation>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
