use crate::error::{AthanorError, Result};
use crate::types::value::{parse_timestamp, SqlValue};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One owned backend row
///
/// Cursors convert driver rows into owned values before yielding them, so
/// decoded records never borrow a live statement.
#[derive(Debug, Clone, Default)]
pub struct Row {
    values: Vec<SqlValue>,
}

impl Row {
    pub fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value at `idx`
    pub fn get(&self, idx: usize) -> Result<&SqlValue> {
        self.values.get(idx).ok_or_else(|| {
            AthanorError::Decode(format!(
                "column {} out of range ({} columns)",
                idx,
                self.values.len()
            ))
        })
    }

    pub fn get_i64(&self, idx: usize) -> Result<i64> {
        match self.get(idx)? {
            SqlValue::Integer(v) => Ok(*v),
            other => Err(type_error(idx, "integer", other)),
        }
    }

    pub fn get_u64(&self, idx: usize) -> Result<u64> {
        let value = self.get_i64(idx)?;
        u64::try_from(value).map_err(|_| {
            AthanorError::Decode(format!("column {}: negative value {}", idx, value))
        })
    }

    pub fn get_text(&self, idx: usize) -> Result<&str> {
        match self.get(idx)? {
            SqlValue::Text(v) => Ok(v),
            other => Err(type_error(idx, "text", other)),
        }
    }

    pub fn get_blob(&self, idx: usize) -> Result<&[u8]> {
        match self.get(idx)? {
            SqlValue::Blob(v) => Ok(v),
            other => Err(type_error(idx, "blob", other)),
        }
    }

    /// Uuid column, stored natively or as hyphenated text
    pub fn get_uuid(&self, idx: usize) -> Result<Uuid> {
        match self.get(idx)? {
            SqlValue::Uuid(v) => Ok(*v),
            SqlValue::Text(v) => Uuid::parse_str(v)
                .map_err(|e| AthanorError::Decode(format!("column {}: bad uuid {:?}: {}", idx, v, e))),
            other => Err(type_error(idx, "uuid", other)),
        }
    }

    /// Timestamp column, stored natively or as canonical RFC 3339 text
    pub fn get_timestamp(&self, idx: usize) -> Result<DateTime<Utc>> {
        match self.get(idx)? {
            SqlValue::Timestamp(v) => Ok(*v),
            SqlValue::Text(v) => parse_timestamp(v),
            other => Err(type_error(idx, "timestamp", other)),
        }
    }

    /// JSON document stored in a text column
    pub fn get_json(&self, idx: usize) -> Result<serde_json::Value> {
        let text = self.get_text(idx)?;
        serde_json::from_str(text)
            .map_err(|e| AthanorError::Decode(format!("column {}: bad JSON: {}", idx, e)))
    }
}

fn type_error(idx: usize, expected: &str, found: &SqlValue) -> AthanorError {
    AthanorError::Decode(format!(
        "column {}: expected {}, found {}",
        idx,
        expected,
        found.type_name()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row() -> Row {
        Row::new(vec![
            SqlValue::Text("5a4ffdd9-5f5f-4b92-9c9e-6b1a22a3b4c5".to_string()),
            SqlValue::Integer(3),
            SqlValue::Text("deposit".to_string()),
            SqlValue::Text(r#"{"amount":50}"#.to_string()),
            SqlValue::Text("2026-08-06T10:30:00.000Z".to_string()),
        ])
    }

    #[test]
    fn typed_getters() {
        let row = sample_row();
        assert_eq!(
            row.get_uuid(0).unwrap(),
            Uuid::parse_str("5a4ffdd9-5f5f-4b92-9c9e-6b1a22a3b4c5").unwrap()
        );
        assert_eq!(row.get_u64(1).unwrap(), 3);
        assert_eq!(row.get_text(2).unwrap(), "deposit");
        assert_eq!(row.get_json(3).unwrap()["amount"], 50);
        assert_eq!(
            row.get_timestamp(4).unwrap(),
            Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn out_of_range_column() {
        let row = sample_row();
        let err = row.get(9).unwrap_err();
        assert!(matches!(err, AthanorError::Decode(_)));
    }

    #[test]
    fn type_mismatch_names_the_column() {
        let row = sample_row();
        let err = row.get_i64(2).unwrap_err();
        assert!(err.to_string().contains("column 2"));
    }

    #[test]
    fn negative_version_rejected() {
        let row = Row::new(vec![SqlValue::Integer(-1)]);
        assert!(row.get_u64(0).is_err());
    }
}
