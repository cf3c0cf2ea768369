//! Athanor Core: traits and types for the athanor stream-read layer
//!
//! This crate defines the reusable core of a read path over an append-only
//! event log stored in a relational backend:
//! - Stream read query: parameterized query construction with conditional
//!   version/timestamp bounds and deterministic ordering
//! - Materialization traits: pluggable row-to-event decoding in blocking
//!   and suspension-capable modes
//! - Collaborator types: execution context, cursor, cancellation token,
//!   identity map, read statistics
//!
//! Backend bindings (the execution context and cursor over a real driver)
//! live in backend crates such as `athanor-sqlite`.

pub mod cancel;
pub mod config;
pub mod error;
pub mod identity;
pub mod observe;
pub mod query;
pub mod stats;
pub mod traits;
pub mod types;

pub use cancel::CancelToken;
pub use config::ReadPoolConfig;
pub use error::{AthanorError, Result};
pub use identity::IdentityMap;
pub use query::StreamReadQuery;
pub use stats::ReadStatistics;
pub use traits::{EventSelector, ReadCommand, RowCursor};
pub use types::{Row, SqlValue, StreamId, Version};
