//! Default JSON decoding strategy
//!
//! Reads events stored one row per event:
//! `stream_id` (uuid text), `version` (integer), `event_type` (text),
//! `data` (JSON text), `timestamp` (RFC 3339 UTC text).
//!
//! One shared row-decode routine backs both entrypoints; the blocking and
//! suspension-capable reads are thin loops around it.

use std::sync::Arc;

use async_trait::async_trait;
use athanor_core::{
    error::{AthanorError, Result},
    traits::{EventSelector, RowCursor},
    types::{Row, StreamId, Version},
    CancelToken, IdentityMap, ReadStatistics,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One decoded event row
#[derive(Debug, Clone, Serialize)]
pub struct StoredEvent {
    pub stream_id: StreamId,
    pub version: Version,
    /// Interned per read: repeated types share one allocation
    pub event_type: Arc<str>,
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

/// JSON decoding strategy over the default `events` table
#[derive(Debug, Clone)]
pub struct JsonEventSelector {
    table: String,
}

impl JsonEventSelector {
    pub fn new() -> Self {
        Self {
            table: "events".to_string(),
        }
    }

    /// Read from a different backing table
    pub fn with_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }

    fn decode_row(&self, row: &Row, identity: &mut IdentityMap) -> Result<StoredEvent> {
        Ok(StoredEvent {
            stream_id: row.get_uuid(0)?,
            version: row.get_u64(1)?,
            event_type: identity.intern(row.get_text(2)?),
            data: row.get_json(3)?,
            timestamp: row.get_timestamp(4)?,
        })
    }
}

impl Default for JsonEventSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl EventSelector for JsonEventSelector {
    type Record = StoredEvent;

    fn select_clause(&self, extra_filter: Option<&str>) -> String {
        let mut clause = format!(
            "select stream_id, version, event_type, data, timestamp from {}",
            self.table
        );
        if let Some(filter) = extra_filter {
            clause.push(' ');
            clause.push_str(filter);
        }
        clause
    }

    fn read(
        &self,
        cursor: &mut dyn RowCursor,
        identity: &mut IdentityMap,
        mut stats: Option<&mut ReadStatistics>,
    ) -> Result<Vec<StoredEvent>> {
        let mut events = Vec::new();
        while let Some(row) = cursor.next_row()? {
            events.push(self.decode_row(&row, identity)?);
            if let Some(stats) = stats.as_deref_mut() {
                stats.rows_read += 1;
            }
        }
        Ok(events)
    }

    async fn read_async(
        &self,
        cursor: &mut dyn RowCursor,
        identity: &mut IdentityMap,
        mut stats: Option<&mut ReadStatistics>,
        cancel: &CancelToken,
    ) -> Result<Vec<StoredEvent>> {
        let mut events = Vec::new();
        loop {
            if cancel.is_cancelled() {
                return Err(AthanorError::Cancelled);
            }
            let row = match cursor.next_row()? {
                Some(row) => row,
                None => break,
            };
            events.push(self.decode_row(&row, identity)?);
            if let Some(stats) = stats.as_deref_mut() {
                stats.rows_read += 1;
            }
            // Row fetches are synchronous; yield between them so the read
            // cooperates with the scheduler
            tokio::task::yield_now().await;
        }
        Ok(events)
    }
}
