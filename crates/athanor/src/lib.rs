//! Athanor: parameterized stream reads for an append-only event log
//!
//! Athanor turns "replay stream `S` up to version `V` / time `T`" into a
//! parameterized SQL read and materializes the returned rows into typed
//! event records:
//! - **Query builder**: conditional predicate composition with safe
//!   parameter binding and an unconditional `order by version`
//! - **Materializer**: blocking and suspension-capable decode paths with
//!   cooperative cancellation
//! - **Decoding strategies**: pluggable row-to-event mapping; a JSON
//!   strategy over an `events` table ships by default
//!
//! # Quick Start
//!
//! ```no_run
//! use athanor::prelude::*;
//! use rusqlite::Connection;
//!
//! # fn main() -> Result<()> {
//! let conn = Connection::open("./events.db").expect("open database");
//! let stream_id = uuid::Uuid::new_v4();
//!
//! let selector = JsonEventSelector::new();
//! let query = StreamReadQuery::new(&selector, stream_id).up_to_version(5);
//! let events = fetch_stream(&conn, &query, None)?;
//!
//! for event in &events {
//!     println!("v{} {}", event.version, event.event_type);
//! }
//! # Ok(())
//! # }
//! ```

pub mod prelude;
pub mod reader;
pub mod selector;

// Re-export core types
pub use athanor_core::{
    error::{AthanorError, Result},
    traits::{EventSelector, ReadCommand, RowCursor},
    types::{Row, SqlValue, StreamId, Version},
    CancelToken, IdentityMap, ReadPoolConfig, ReadStatistics, StreamReadQuery,
};

// Re-export the SQLite backend
pub use athanor_sqlite::{PooledConnection, PreparedRead, SqliteReadCommand, SqliteReadPool, SqliteRows};

// Re-export main types from this crate
pub use reader::{fetch_stream, fetch_stream_async};
pub use selector::{JsonEventSelector, StoredEvent};
