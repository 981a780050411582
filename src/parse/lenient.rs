//! Tolerant serde helpers for untrusted workflow JSON.
//!
//! A field whose shape does not match its Rust type decodes to `None`
//! instead of failing the whole document. Presence follows JSON falsiness:
//! `null`, `""`, `false` and `0` count as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Whether a value would count as "set" in the workflow editor.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Textual form of a truthy scalar. Arrays and objects are not text.
pub fn text(value: &Value) -> Option<String> {
    if !is_truthy(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `deserialize_with` target for identifier-like fields.
pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text))
}

/// `deserialize_with` target for any nested structure.
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(decode))
}

/// `deserialize_with` target for a truthy value of any shape.
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.filter(is_truthy))
}

/// `deserialize_with` target for a JSON object kept as ordered entries.
/// Entries that do not fit `T` are replaced by `T::default()`.
pub fn entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<(String, T)>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(map)) = value else {
        return Ok(None);
    };
    Ok(Some(object_entries(map)))
}

/// Like `entries`, but any other truthy value still counts as present
/// (with no entries).
pub fn present_entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<(String, T)>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    match value {
        Some(Value::Object(map)) => Ok(Some(object_entries(map))),
        Some(other) if is_truthy(&other) => Ok(Some(Vec::new())),
        _ => Ok(None),
    }
}

/// `deserialize_with` target for a JSON array decoded element by element.
/// Elements that do not fit `T` become `T::default()`; the rest are kept.
pub fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(None);
    };
    Ok(Some(
        items
            .into_iter()
            .map(|item| decode(item).unwrap_or_default())
            .collect(),
    ))
}

fn object_entries<T>(map: Map<String, Value>) -> Vec<(String, T)>
where
    T: DeserializeOwned + Default,
{
    map.into_iter()
        .map(|(key, value)| {
            let decoded = decode(value).unwrap_or_default();
            (key, decoded)
        })
        .collect()
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Option<T> {
    if !is_truthy(&value) {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::debug!(
                target: "workflow_validator::parse",
                error = %e,
                "ignoring malformed field"
            );
            None
        }
    }
}
