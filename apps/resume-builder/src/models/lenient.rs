//! Tolerant field decoders for persisted documents.
//!
//! The structural check only looks at top-level keys, so anything below it
//! may hold `null`, a number where a string was expected, or list entries
//! that are not objects. These helpers never fail: they keep what can be
//! read and default the rest, so a document that passed the structural
//! check always decodes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Strings; numbers and booleans are kept as text, anything else is `""`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Booleans; `"true"` and non-zero numbers count as `true`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

/// Skill level: a number or numeric string in `0..=255`, else unset.
pub fn level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// A list of strings; non-scalar entries are dropped.
pub fn strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_to_string).collect(),
        _ => Vec::new(),
    })
}

/// A list of records; entries that are not objects are skipped.
pub fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Skipping unreadable list entry: {e}");
                None
            }
        })
        .collect())
}

/// Any other value: decoded normally, or `T::default()` when it does not fit.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "string")]
        text: String,
        #[serde(deserialize_with = "flag")]
        on: bool,
        #[serde(deserialize_with = "level")]
        level: Option<u8>,
        #[serde(deserialize_with = "strings")]
        tags: Vec<String>,
        #[serde(deserialize_with = "records")]
        rows: Vec<Row>,
        #[serde(deserialize_with = "or_default")]
        count: u32,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct Row {
        name: String,
    }

    fn decode(value: Value) -> Sample {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_nulls_become_defaults() {
        let sample = decode(json!({
            "text": null, "on": null, "level": null, "tags": null, "rows": null, "count": null
        }));
        assert_eq!(sample.text, "");
        assert!(!sample.on);
        assert_eq!(sample.level, None);
        assert!(sample.tags.is_empty());
        assert!(sample.rows.is_empty());
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn test_scalars_are_converted() {
        let sample = decode(json!({ "text": 42, "on": "true", "level": "4", "count": "x" }));
        assert_eq!(sample.text, "42");
        assert!(sample.on);
        assert_eq!(sample.level, Some(4));
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn test_out_of_range_level_is_unset() {
        assert_eq!(decode(json!({ "level": 300 })).level, None);
        assert_eq!(decode(json!({ "level": -1 })).level, None);
        assert_eq!(decode(json!({ "level": 5 })).level, Some(5));
    }

    #[test]
    fn test_non_object_records_are_skipped() {
        let sample = decode(json!({
            "rows": [{ "name": "kept" }, 42, "loose string", null, { "name": 7 }],
            "tags": ["a", 1, null, { "x": 1 }]
        }));
        assert_eq!(
            sample.rows,
            vec![Row {
                name: "kept".to_string()
            }]
        );
        assert_eq!(sample.tags, vec!["a".to_string(), "1".to_string()]);
    }
}
