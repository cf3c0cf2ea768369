//! High-level stream read entry points
//!
//! Wires the query builder, the SQLite execution context, and the decoding
//! strategy together for one-call reads. The command and cursor are owned
//! by the single in-flight read and discarded when the rows are consumed.

use std::time::Instant;

use athanor_core::{
    error::Result, observe, AthanorError, CancelToken, EventSelector, IdentityMap, ReadStatistics,
    StreamReadQuery,
};
use athanor_sqlite::{SqliteReadCommand, SqliteReadPool};
use rusqlite::Connection;

/// Execute `query` on `conn`, blocking until all rows are materialized
pub fn fetch_stream<S: EventSelector>(
    conn: &Connection,
    query: &StreamReadQuery<'_, S>,
    stats: Option<&mut ReadStatistics>,
) -> Result<Vec<S::Record>> {
    let start = Instant::now();

    let mut cmd = SqliteReadCommand::new();
    query.configure(&mut cmd);

    let mut prepared = cmd.prepare(conn)?;
    let mut cursor = prepared.query()?;
    let mut identity = IdentityMap::new();
    let events = query.read(&mut cursor, &mut identity, stats)?;

    observe::record_stream_read(start.elapsed(), events.len() as u64);
    tracing::debug!(
        "read {} events from stream {} in {:?}",
        events.len(),
        query.stream_id(),
        start.elapsed()
    );
    Ok(events)
}

/// Execute `query` on a pooled read-only connection, observing `cancel`
/// between row fetches
pub async fn fetch_stream_async<S: EventSelector>(
    pool: &SqliteReadPool,
    query: &StreamReadQuery<'_, S>,
    stats: Option<&mut ReadStatistics>,
    cancel: &CancelToken,
) -> Result<Vec<S::Record>> {
    let start = Instant::now();
    let conn = pool.acquire().await?;

    let mut cmd = SqliteReadCommand::new();
    query.configure(&mut cmd);

    let mut prepared = cmd.prepare(conn.connection())?;
    let mut cursor = prepared.query()?;
    let mut identity = IdentityMap::new();

    match query.read_async(&mut cursor, &mut identity, stats, cancel).await {
        Ok(events) => {
            observe::record_stream_read(start.elapsed(), events.len() as u64);
            tracing::debug!(
                "read {} events from stream {} in {:?}",
                events.len(),
                query.stream_id(),
                start.elapsed()
            );
            Ok(events)
        }
        Err(err) => {
            if matches!(err, AthanorError::Cancelled) {
                observe::record_read_cancelled();
                tracing::debug!("read of stream {} cancelled", query.stream_id());
            }
            Err(err)
        }
    }
}
