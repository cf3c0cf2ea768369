use athanor_core::{
    error::{AthanorError, Result},
    traits::ReadCommand,
    types::{format_timestamp, SqlValue},
};
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::{Connection, Statement, ToSql};

use crate::cursor::SqliteRows;

/// Execution context for one SQLite read
///
/// Collects final query text plus named parameter bindings (`:p1`..`:pN`).
/// One command serves exactly one execution.
#[derive(Debug, Default)]
pub struct SqliteReadCommand {
    sql: String,
    params: Vec<(String, SqlValue)>,
}

impl SqliteReadCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query text accumulated so far
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bound parameters in bind order
    pub fn params(&self) -> &[(String, SqlValue)] {
        &self.params
    }

    /// Prepare the accumulated query against `conn`
    pub fn prepare<'conn>(&self, conn: &'conn Connection) -> Result<PreparedRead<'conn>> {
        let stmt = conn
            .prepare(&self.sql)
            .map_err(|e| AthanorError::Backend(e.to_string()))?;
        Ok(PreparedRead {
            stmt,
            params: self.params.clone(),
        })
    }
}

impl ReadCommand for SqliteReadCommand {
    fn add_param(&mut self, value: SqlValue) -> String {
        let placeholder = format!(":p{}", self.params.len() + 1);
        self.params.push((placeholder.clone(), value));
        placeholder
    }

    fn append_sql(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }
}

/// Adapter binding a core value through rusqlite
///
/// Uuids and timestamps bind as their canonical text renderings so bound
/// predicates compare consistently against stored columns.
struct Param<'a>(&'a SqlValue);

impl ToSql for Param<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let out = match self.0 {
            SqlValue::Null => ToSqlOutput::Owned(Value::Null),
            SqlValue::Integer(v) => ToSqlOutput::Owned(Value::Integer(*v)),
            SqlValue::Real(v) => ToSqlOutput::Owned(Value::Real(*v)),
            SqlValue::Text(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            SqlValue::Blob(v) => ToSqlOutput::Borrowed(ValueRef::Blob(v)),
            SqlValue::Uuid(v) => ToSqlOutput::Owned(Value::Text(v.to_string())),
            SqlValue::Timestamp(v) => ToSqlOutput::Owned(Value::Text(format_timestamp(v))),
        };
        Ok(out)
    }
}

/// A prepared, not-yet-executed read
pub struct PreparedRead<'conn> {
    stmt: Statement<'conn>,
    params: Vec<(String, SqlValue)>,
}

impl std::fmt::Debug for PreparedRead<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedRead")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl PreparedRead<'_> {
    /// Bind parameters and execute, producing a forward-only cursor
    pub fn query(&mut self) -> Result<SqliteRows<'_>> {
        let column_count = self.stmt.column_count();
        let wrapped: Vec<Param<'_>> = self.params.iter().map(|(_, value)| Param(value)).collect();
        let bound: Vec<(&str, &dyn ToSql)> = self
            .params
            .iter()
            .zip(wrapped.iter())
            .map(|((name, _), param)| (name.as_str(), param as &dyn ToSql))
            .collect();

        let rows = self
            .stmt
            .query(bound.as_slice())
            .map_err(|e| AthanorError::Backend(e.to_string()))?;
        Ok(SqliteRows::new(rows, column_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athanor_core::traits::RowCursor;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    #[test]
    fn placeholders_number_from_one() {
        let mut cmd = SqliteReadCommand::new();
        assert_eq!(cmd.add_param(SqlValue::Integer(1)), ":p1");
        assert_eq!(cmd.add_param(SqlValue::Integer(2)), ":p2");
        assert_eq!(cmd.add_param(SqlValue::Integer(3)), ":p3");
        assert_eq!(cmd.params().len(), 3);
    }

    #[test]
    fn binds_canonical_text_for_uuid_and_timestamp() {
        let conn = Connection::open_in_memory().unwrap();
        let id = Uuid::parse_str("5a4ffdd9-5f5f-4b92-9c9e-6b1a22a3b4c5").unwrap();
        let ts = Utc.with_ymd_and_hms(2026, 8, 6, 10, 30, 0).unwrap();

        let mut cmd = SqliteReadCommand::new();
        let p1 = cmd.add_param(SqlValue::Uuid(id));
        let p2 = cmd.add_param(SqlValue::Timestamp(ts));
        cmd.append_sql(&format!("select {}, {}", p1, p2));

        let mut prepared = cmd.prepare(&conn).unwrap();
        let mut cursor = prepared.query().unwrap();
        let row = cursor.next_row().unwrap().unwrap();

        assert_eq!(row.get_text(0).unwrap(), "5a4ffdd9-5f5f-4b92-9c9e-6b1a22a3b4c5");
        assert_eq!(row.get_text(1).unwrap(), "2026-08-06T10:30:00.000Z");
    }

    #[test]
    fn executes_against_a_real_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("create table t (k text not null, n integer not null)", [])
            .unwrap();
        conn.execute("insert into t (k, n) values ('a', 1), ('b', 2), ('a', 3)", [])
            .unwrap();

        let mut cmd = SqliteReadCommand::new();
        let p1 = cmd.add_param(SqlValue::Text("a".to_string()));
        cmd.append_sql(&format!("select n from t where k = {} order by n", p1));

        let mut prepared = cmd.prepare(&conn).unwrap();
        let mut cursor = prepared.query().unwrap();

        let mut seen = Vec::new();
        while let Some(row) = cursor.next_row().unwrap() {
            seen.push(row.get_i64(0).unwrap());
        }
        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn malformed_sql_is_a_backend_error() {
        let conn = Connection::open_in_memory().unwrap();
        let mut cmd = SqliteReadCommand::new();
        cmd.append_sql("select from nowhere at all");

        let err = cmd.prepare(&conn).unwrap_err();
        assert!(matches!(err, AthanorError::Backend(_)));
    }
}
