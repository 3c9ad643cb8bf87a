//! Timestamp decoding for storefront API records.
//!
//! Orders carry `date` as epoch milliseconds while users and invoices carry
//! `createdAt` as an RFC 3339 string. Both decode to `DateTime<Utc>`.
//!
//! Use with `#[serde(deserialize_with = "...")]`:
//!
//! ```rust
//! use atelier_core::types::timestamp;
//! use chrono::{DateTime, Utc};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Row {
//!     #[serde(deserialize_with = "timestamp::deserialize")]
//!     at: DateTime<Utc>,
//! }
//!
//! let a: Row = serde_json::from_str(r#"{"at": 1700000000000}"#).unwrap();
//! let b: Row = serde_json::from_str(r#"{"at": "2023-11-14T22:13:20Z"}"#).unwrap();
//! assert_eq!(a.at, b.at);
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Millis(i64),
    Float(f64),
    Text(String),
}

fn from_raw<E: de::Error>(raw: RawTimestamp) -> Result<DateTime<Utc>, E> {
    match raw {
        RawTimestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {ms}"))),
        #[allow(clippy::cast_possible_truncation)]
        RawTimestamp::Float(ms) => DateTime::from_timestamp_millis(ms as i64)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {ms}"))),
        RawTimestamp::Text(text) => parse_text(&text)
            .ok_or_else(|| E::custom(format!("unrecognised timestamp: {text}"))),
    }
}

/// Parse RFC 3339, bare `YYYY-MM-DD`, or a stringified millisecond count.
fn parse_text(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    text.parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
}

/// Deserialize a required timestamp.
///
/// # Errors
///
/// Fails if the value is neither a number nor a recognised date string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    from_raw(RawTimestamp::deserialize(deserializer)?)
}

/// Deserialize an optional timestamp; `null` or a missing field yields `None`.
///
/// Pair with `#[serde(default)]`.
///
/// # Errors
///
/// Fails if a present value is neither a number nor a recognised date string.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawTimestamp>::deserialize(deserializer)?
        .map(from_raw)
        .transpose()
}

/// Short display date used in tables, e.g. `14/11/2023`.
#[must_use]
pub fn display_date(at: &DateTime<Utc>) -> String {
    at.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "deserialize_option")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_optional_missing_and_null() {
        let missing: Row = serde_json::from_str("{}").unwrap();
        assert!(missing.at.is_none());
        let null: Row = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(null.at.is_none());
    }

    #[test]
    fn test_bare_date_and_numeric_string() {
        let day: Row = serde_json::from_str(r#"{"at": "2024-03-01"}"#).unwrap();
        assert_eq!(display_date(&day.at.unwrap()), "01/03/2024");

        let ms: Row = serde_json::from_str(r#"{"at": "1709251200000"}"#).unwrap();
        assert_eq!(ms.at, day.at);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(serde_json::from_str::<Row>(r#"{"at": "yesterday"}"#).is_err());
    }
}
