use athanor_core::{
    error::{AthanorError, Result},
    traits::RowCursor,
    types::{Row, SqlValue},
};
use rusqlite::types::ValueRef;

/// Forward-only cursor over executed SQLite rows
///
/// Each advance converts the current driver row into owned values, so
/// decoded records never borrow the underlying statement.
pub struct SqliteRows<'stmt> {
    rows: rusqlite::Rows<'stmt>,
    column_count: usize,
}

impl<'stmt> SqliteRows<'stmt> {
    pub(crate) fn new(rows: rusqlite::Rows<'stmt>, column_count: usize) -> Self {
        Self { rows, column_count }
    }
}

impl RowCursor for SqliteRows<'_> {
    fn next_row(&mut self) -> Result<Option<Row>> {
        let row = match self
            .rows
            .next()
            .map_err(|e| AthanorError::Backend(e.to_string()))?
        {
            Some(row) => row,
            None => return Ok(None),
        };

        let mut values = Vec::with_capacity(self.column_count);
        for idx in 0..self.column_count {
            let value = row
                .get_ref(idx)
                .map_err(|e| AthanorError::Backend(e.to_string()))?;
            values.push(owned_value(value));
        }
        Ok(Some(Row::new(values)))
    }
}

fn owned_value(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(v) => SqlValue::Integer(v),
        ValueRef::Real(v) => SqlValue::Real(v),
        ValueRef::Text(v) => SqlValue::Text(String::from_utf8_lossy(v).into_owned()),
        ValueRef::Blob(v) => SqlValue::Blob(v.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use athanor_core::traits::ReadCommand;
    use crate::command::SqliteReadCommand;
    use rusqlite::Connection;

    #[test]
    fn yields_owned_rows_until_exhaustion() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute(
            "create table t (n integer not null, label text, data blob)",
            [],
        )
        .unwrap();
        conn.execute(
            "insert into t (n, label, data) values (1, 'one', x'0102'), (2, null, null)",
            [],
        )
        .unwrap();

        let mut cmd = SqliteReadCommand::new();
        cmd.append_sql("select n, label, data from t order by n");
        let mut prepared = cmd.prepare(&conn).unwrap();
        let mut cursor = prepared.query().unwrap();

        let first = cursor.next_row().unwrap().unwrap();
        assert_eq!(first.get_i64(0).unwrap(), 1);
        assert_eq!(first.get_text(1).unwrap(), "one");
        assert_eq!(first.get_blob(2).unwrap(), &[1, 2]);

        let second = cursor.next_row().unwrap().unwrap();
        assert_eq!(second.get_i64(0).unwrap(), 2);
        assert!(matches!(second.get(1).unwrap(), SqlValue::Null));

        assert!(cursor.next_row().unwrap().is_none());
        // Exhaustion is terminal
        assert!(cursor.next_row().unwrap().is_none());
    }
}
