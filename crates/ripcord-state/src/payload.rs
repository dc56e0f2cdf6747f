//! Typed field accessors over a raw API payload.
//!
//! Every accessor follows the same policy: a key that is absent (or an
//! explicit JSON `null`) yields `Ok(None)`; a key that is present with a
//! value of the wrong shape yields [`StateError::MalformedField`]. Casts are
//! strict — `"5"` is not an integer and `1` is not a boolean.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::error::StateError;

fn get<'a>(payload: &'a Value, field: &str) -> Option<&'a Value> {
    match payload.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => Some(value),
    }
}

fn malformed(field: &'static str, value: &Value, expected: &'static str) -> StateError {
    tracing::debug!(field, %value, expected, "rejecting malformed payload field");
    StateError::MalformedField {
        field,
        value: value.clone(),
        expected,
    }
}

pub fn opt_str(payload: &Value, field: &'static str) -> Result<Option<String>, StateError> {
    match get(payload, field) {
        None => Ok(None),
        Some(value) => match value.as_str() {
            Some(s) => Ok(Some(s.to_owned())),
            None => Err(malformed(field, value, "string")),
        },
    }
}

pub fn opt_i64(payload: &Value, field: &'static str) -> Result<Option<i64>, StateError> {
    match get(payload, field) {
        None => Ok(None),
        Some(value) => match value.as_i64() {
            Some(n) => Ok(Some(n)),
            None => Err(malformed(field, value, "integer")),
        },
    }
}

pub fn opt_bool(payload: &Value, field: &'static str) -> Result<Option<bool>, StateError> {
    match get(payload, field) {
        None => Ok(None),
        Some(value) => match value.as_bool() {
            Some(b) => Ok(Some(b)),
            None => Err(malformed(field, value, "boolean")),
        },
    }
}

/// Reads an ISO-8601 timestamp, preserving the offset carried in the string.
pub fn opt_timestamp(
    payload: &Value,
    field: &'static str,
) -> Result<Option<DateTime<FixedOffset>>, StateError> {
    match get(payload, field) {
        None => Ok(None),
        Some(value) => {
            let raw = value
                .as_str()
                .ok_or_else(|| malformed(field, value, "ISO-8601 timestamp"))?;
            match DateTime::parse_from_rfc3339(raw) {
                Ok(ts) => Ok(Some(ts)),
                Err(_) => Err(malformed(field, value, "ISO-8601 timestamp")),
            }
        }
    }
}
