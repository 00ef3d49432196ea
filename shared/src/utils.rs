//! # Shared Utility Functions
//!
//! Helpers for reading the backend's loosely typed JSON.
//!
//! ## Lenient Numbers
//!
//! The backend sends ids as numbers from REST endpoints and as strings from GraphQL
//! (`ID` scalar). Prices sometimes arrive as decimal strings (`"10.50"`). The
//! `deserialize_*` functions accept both forms and are meant for
//! `#[serde(default, deserialize_with = "...")]` fields:
//!
//! ```rust
//! use serde::Deserialize;
//! use shared::utils::deserialize_opt_i64;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     #[serde(default, deserialize_with = "deserialize_opt_i64")]
//!     id: Option<i64>,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{ "id": "42" }"#).unwrap();
//! assert_eq!(row.id, Some(42));
//! ```
//!
//! ## Timestamps
//!
//! [`parse_timestamp`] understands the handful of date formats the backend emits
//! (RFC 3339, naive ISO with or without fraction, plain dates, epoch millis).

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Read an integer out of a JSON number or numeric string.
///
/// Floats are accepted only when they have no fractional part.
pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a float out of a JSON number or numeric string.
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Read a scalar as text. Numbers keep their JSON spelling (`10`, `10.5`).
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `Option<i64>` from a number, numeric string or null.
pub fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

/// `Option<f64>` from a number, numeric string or null.
pub fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

/// `Option<String>` from a string or number (cédulas come as both).
pub fn deserialize_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_string))
}

/// Required id: a number or numeric string.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_i64(&value)
        .ok_or_else(|| de::Error::custom(format!("expected numeric id, got {}", value)))
}

/// `Vec<T>` where the backend may send `null` instead of an empty list.
pub fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Parse a backend timestamp into UTC.
///
/// Naive values are taken as UTC. Returns `None` for anything unrecognised.
///
/// # Examples
///
/// ```rust
/// use shared::utils::parse_timestamp;
///
/// assert!(parse_timestamp("2024-03-05T14:30:00.000Z").is_some());
/// assert!(parse_timestamp("2024-03-05").is_some());
/// assert!(parse_timestamp("1709649000000").is_some());
/// assert!(parse_timestamp("ayer").is_none());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| Utc.from_utc_datetime(&naive));
    }

    raw.parse::<i64>()
        .ok()
        .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
}

/// Parse a timestamp held in a JSON value (string or epoch millis number).
pub fn value_as_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    }
}
