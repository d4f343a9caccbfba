//! Date/time serialization helpers.
//!
//! Custom Serde support for optional timestamps:
//! - Serialize: `DateTime<Utc>` -> RFC3339 string
//! - Deserialize: RFC3339 string or Unix timestamp -> `DateTime<Utc>`
//!
//! Marketplace APIs are inconsistent here: most fields are ISO8601 strings
//! but some payloads carry epoch seconds or milliseconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize `Option<DateTime<Utc>>` as an optional RFC3339 string.
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
        None => serializer.serialize_none(),
    }
}

/// Deserialize: accepts an RFC3339 string or a Unix timestamp
/// (seconds/milliseconds detected automatically).
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OptionalTimestamp {
        String(String),
        I64(i64),
        U64(u64),
    }

    match Option::<OptionalTimestamp>::deserialize(deserializer)? {
        Some(OptionalTimestamp::String(s)) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp: {e}"))),
        Some(OptionalTimestamp::I64(ts)) => parse_unix_timestamp(ts)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        #[allow(clippy::cast_possible_wrap)]
        Some(OptionalTimestamp::U64(ts)) => parse_unix_timestamp(ts as i64)
            .map(Some)
            .ok_or_else(|| Error::custom("Invalid Unix timestamp")),
        None => Ok(None),
    }
}

/// Parse a Unix timestamp, detecting seconds vs milliseconds.
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // Above 10^11 it must be milliseconds.
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
