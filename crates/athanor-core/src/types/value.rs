use crate::error::{AthanorError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Owned SQL parameter or column value
///
/// Backend crates map these to their driver's native binding types when a
/// query executes, and back again when a cursor yields rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Short name of the contained type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Integer(_) => "integer",
            SqlValue::Real(_) => "real",
            SqlValue::Text(_) => "text",
            SqlValue::Blob(_) => "blob",
            SqlValue::Uuid(_) => "uuid",
            SqlValue::Timestamp(_) => "timestamp",
        }
    }
}

/// Canonical text rendering for timestamp columns and bound predicates.
///
/// Fixed-width RFC 3339 UTC with millisecond precision, so lexicographic
/// comparison of stored text equals chronological comparison.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse a timestamp column back from its canonical text rendering
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| AthanorError::Decode(format!("bad timestamp {:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_text_round_trip() {
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap();
        let text = format_timestamp(&ts);
        assert_eq!(text, "2026-08-06T10:30:00.000Z");
        assert_eq!(parse_timestamp(&text).unwrap(), ts);
    }

    #[test]
    fn timestamp_text_orders_chronologically() {
        let earlier = Utc.with_ymd_and_hms(2026, 8, 6, 9, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2026, 8, 6, 10, 0, 0).unwrap();
        assert!(format_timestamp(&earlier) < format_timestamp(&later));
    }

    #[test]
    fn bad_timestamp_text_is_a_decode_error() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, AthanorError::Decode(_)));
    }
}
