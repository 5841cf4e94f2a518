//! Lenient `deserialize_with` helpers for the schema model.
//!
//! The validator only checks presence (JSON truthiness) of a handful of
//! properties, so a valid document may still carry a numeric label, a
//! `null` type or `"required": null`. These helpers map any JSON value onto
//! the model's field types instead of failing the whole conversion.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::types::{FormOption, ValidationRule};
use crate::validate::is_truthy;

/// Display text of a JSON value: strings verbatim, `null` as empty, anything
/// else as its JSON text.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_text(&Value::deserialize(deserializer)?))
}

pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => Ok(Some(value_text(&other))),
    }
}

pub(crate) fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(Some(&value)))
}

pub(crate) fn optional_truthy<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        other => Ok(Some(is_truthy(Some(&other)))),
    }
}

/// Non-negative whole numbers, or strings holding one. Anything else is
/// treated as no bound.
pub(crate) fn optional_length<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let length = match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(length)
}

/// A non-array `options` value is treated as absent. Entries that are not
/// objects become options with empty value and label.
pub(crate) fn options<'de, D>(deserializer: D) -> Result<Option<Vec<FormOption>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let options = entries
        .iter()
        .map(|entry| {
            let property = |key: &str| entry.get(key).map(value_text).unwrap_or_default();
            FormOption::new(property("value"), property("label"))
        })
        .collect();
    Ok(Some(options))
}

/// A non-object `validation` value is treated as absent.
pub(crate) fn validation<'de, D>(deserializer: D) -> Result<Option<ValidationRule>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        rule @ Value::Object(_) => ValidationRule::deserialize(rule)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
