//! Field deserializers that treat malformed values as absent
//!
//! Specs in the wild carry vendor extensions (`x-*` keys) and loosely typed
//! values. Fields read through these helpers never fail the whole document:
//! a value of the wrong shape is dropped and the field falls back to its
//! default. Values are buffered as a YAML tree because it also accepts the
//! non-string mapping keys YAML allows (`200:` under `responses`).

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Decode a mapping node; sequences and scalars are absent
///
/// Derived struct impls would otherwise accept a sequence positionally.
fn from_mapping<T: DeserializeOwned>(value: Value) -> Option<T> {
    match value {
        Value::Mapping(_) => serde_yaml::from_value(value).ok(),
        _ => None,
    }
}

/// Scalar or list field; a value of the wrong type becomes `None`
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_yaml::from_value(value).ok())
}

/// Like [`optional`], falling back to `T::default()`
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(optional(deserializer)?.unwrap_or_default())
}

/// Struct field that must be a mapping
pub(crate) fn object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(from_mapping(Value::deserialize(deserializer)?))
}

/// Like [`object`], falling back to `T::default()`
pub(crate) fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(object(deserializer)?.unwrap_or_default())
}

/// List of structs; non-mapping items are skipped
pub(crate) fn objects<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Sequence(items) => items.into_iter().filter_map(from_mapping).collect(),
        _ => Vec::new(),
    })
}

/// String-keyed map of structs, in document order
///
/// Entries with a non-string key or a non-mapping value are skipped.
pub(crate) fn object_map<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Mapping(entries) => entries
            .into_iter()
            .filter_map(|(key, value)| {
                let key = key.as_str()?.to_string();
                Some((key, from_mapping(value)?))
            })
            .collect(),
        _ => IndexMap::new(),
    })
}
