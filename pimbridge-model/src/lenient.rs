//! Forgiving decoders for caller-supplied JSON.
//!
//! Callers hand over loosely typed records. A sequence field that is not an
//! array is treated as absent, and entries inside it that are null or do not
//! decode into the element type are dropped rather than failing the whole
//! record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes an optional sequence, skipping entries that do not fit `T`.
pub(crate) fn sequence<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

/// Decodes a boolean flag where null or any non-boolean means `false`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(matches!(raw, Some(Value::Bool(true))))
}
