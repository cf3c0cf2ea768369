//! Stream read query: parameterized query construction plus delegated
//! row materialization
//!
//! One `StreamReadQuery` serves exactly one execution: configure a command,
//! let the backend execute it, then hand the resulting cursor back to
//! `read` or `read_async`.

use crate::cancel::CancelToken;
use crate::error::{AthanorError, Result};
use crate::identity::IdentityMap;
use crate::stats::ReadStatistics;
use crate::traits::{EventSelector, ReadCommand, RowCursor};
use crate::types::{SqlValue, StreamId, Version};
use chrono::{DateTime, FixedOffset, Utc};

/// A bounded read over one event stream
///
/// Holds the decoding strategy reference, the stream identifier, and the
/// optional version/timestamp bounds. Immutable once constructed.
#[derive(Debug)]
pub struct StreamReadQuery<'a, S: EventSelector> {
    selector: &'a S,
    stream_id: StreamId,
    max_version: Version,
    max_timestamp: Option<DateTime<Utc>>,
}

impl<'a, S: EventSelector> StreamReadQuery<'a, S> {
    /// Read every event of `stream_id`, in version order
    pub fn new(selector: &'a S, stream_id: StreamId) -> Self {
        Self {
            selector,
            stream_id,
            max_version: 0,
            max_timestamp: None,
        }
    }

    /// Restrict results to events with `version <= version`
    ///
    /// A bound of 0 means "no upper bound".
    pub fn up_to_version(mut self, version: Version) -> Self {
        self.max_version = version;
        self
    }

    /// Restrict results to events recorded at or before `timestamp`
    ///
    /// Stored timestamps are UTC, so only a UTC-equivalent bound (offset
    /// +00:00) is accepted; any other offset fails with `InvalidArgument`
    /// before any query text exists. Offsets are rejected rather than
    /// normalized to keep ambiguous comparisons out of the backend.
    pub fn up_to_time(mut self, timestamp: DateTime<FixedOffset>) -> Result<Self> {
        if timestamp.offset().local_minus_utc() != 0 {
            return Err(AthanorError::InvalidArgument(format!(
                "timestamp bound must be UTC, got offset {}",
                timestamp.offset()
            )));
        }
        self.max_timestamp = Some(timestamp.with_timezone(&Utc));
        Ok(self)
    }

    pub fn stream_id(&self) -> StreamId {
        self.stream_id
    }

    /// Write the final query text and parameter bindings into `cmd`
    ///
    /// The assembled shape is always:
    ///
    /// ```text
    /// <base selection clause>
    ///  where stream_id = :p1
    /// [ and version   <= :p2 ]
    /// [ and timestamp <= :p3 ]
    ///  order by version
    /// ```
    ///
    /// Parameter order matches predicate presence order: stream id, then
    /// version (if set), then timestamp (if set).
    pub fn configure(&self, cmd: &mut dyn ReadCommand) {
        let mut sql = self.selector.select_clause(None);

        let stream_param = cmd.add_param(SqlValue::Uuid(self.stream_id));
        sql.push_str(&format!(" where stream_id = {}", stream_param));

        if self.max_version > 0 {
            let version_param = cmd.add_param(SqlValue::Integer(self.max_version as i64));
            sql.push_str(&format!(" and version <= {}", version_param));
        }

        if let Some(timestamp) = self.max_timestamp {
            let timestamp_param = cmd.add_param(SqlValue::Timestamp(timestamp));
            sql.push_str(&format!(" and timestamp <= {}", timestamp_param));
        }

        sql.push_str(" order by version");
        cmd.append_sql(&sql);
    }

    /// Materialize every cursor row, blocking until exhaustion
    pub fn read(
        &self,
        cursor: &mut dyn RowCursor,
        identity: &mut IdentityMap,
        stats: Option<&mut ReadStatistics>,
    ) -> Result<Vec<S::Record>> {
        self.selector.read(cursor, identity, stats)
    }

    /// Materialize every cursor row, cooperating with the scheduler and
    /// observing `cancel` between fetches
    pub async fn read_async(
        &self,
        cursor: &mut dyn RowCursor,
        identity: &mut IdentityMap,
        stats: Option<&mut ReadStatistics>,
        cancel: &CancelToken,
    ) -> Result<Vec<S::Record>> {
        self.selector.read_async(cursor, identity, stats, cancel).await
    }
}
