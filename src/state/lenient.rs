//! Forgiving `deserialize_with` helpers for data handed over by the UI or the
//! bundled JSON.
//!
//! Every helper reads the raw [`Value`] first and substitutes an empty/absent
//! value when the shape is wrong, so one malformed field never rejects the
//! whole document. Shape defects in facet and sort input are logged.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::state::types::{FacetToken, SortMode};

/// String field; anything but a JSON string reads as empty.
pub fn string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// Optional string field; non-strings read as `None`.
pub fn opt_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Optional number field; strings, booleans and null read as `None`.
pub fn opt_number<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(d)?.as_f64())
}

/// What: List of strings where non-string elements are dropped.
///
/// Inputs:
/// - `d`: Deserializer positioned at the field value.
///
/// Output:
/// - The string elements in order; an empty vector when the value is not an array.
pub fn strings<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// What: Facet selection set matched token by token.
///
/// Inputs:
/// - `d`: Deserializer positioned at the facet value.
///
/// Output:
/// - Set of recognised tokens.
///
/// Details:
/// - Tokens must match exactly (`"oilskin"`, `"12oz+"`, `"YKK"`); other
///   spellings are unknown.
/// - `null` means unset. Any other non-array value is treated as unset with a warning.
/// - Unrecognised or non-string tokens are skipped with a warning.
pub fn set<'de, D, T>(d: D) -> Result<BTreeSet<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FacetToken + Ord,
{
    Ok(collect_set(Value::deserialize(d)?, T::from_token))
}

/// Free-text facet (sub-category names): every string item is kept as is.
pub fn string_set<'de, D>(d: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(collect_set(Value::deserialize(d)?, |s| Some(s.to_string())))
}

fn collect_set<T: Ord>(raw: Value, parse: impl Fn(&str) -> Option<T>) -> BTreeSet<T> {
    let items = match raw {
        Value::Array(items) => items,
        Value::Null => return BTreeSet::new(),
        other => {
            tracing::warn!(value = %other, "facet is not a list; ignoring it");
            return BTreeSet::new();
        }
    };
    let mut out = BTreeSet::new();
    for item in items {
        match item.as_str().and_then(&parse) {
            Some(v) => {
                out.insert(v);
            }
            None => tracing::warn!(token = %item, "unknown facet token; skipping"),
        }
    }
    out
}

/// What: JavaScript-style truthiness of a JSON value.
///
/// Inputs:
/// - `v`: Any JSON value.
///
/// Output:
/// - `false` for `null`, `false`, `0`, and `""`; `true` otherwise.
#[must_use]
pub fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Boolean flag using [`is_truthy`] for non-boolean input.
pub fn truthy<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(d)?))
}

/// Sort mode by config key; unknown or non-string values become `None` with a warning.
pub fn sort_mode<'de, D>(d: D) -> Result<Option<SortMode>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(d)?;
    let parsed = raw.as_str().and_then(SortMode::from_config_key);
    if parsed.is_none() {
        tracing::warn!(value = %raw, "unknown sort mode; using type order only");
    }
    Ok(parsed)
}
