//! SQLite backend for athanor stream reads
//!
//! Implements the core's execution-context and cursor traits over
//! `rusqlite`:
//! - Named parameter binding (`:p1`..`:pN`), never literal interpolation
//! - Owned-row cursor, so decoded records outlive the statement
//! - Read-only connection pool giving the suspension-capable read path
//!   its await point

pub mod command;
pub mod cursor;
pub mod read_pool;

pub use command::{PreparedRead, SqliteReadCommand};
pub use cursor::SqliteRows;
pub use read_pool::{PooledConnection, SqliteReadPool};
