//! Athanor Prelude
//!
//! Import this to get all commonly used types and traits:
//!
//! ```
//! use athanor::prelude::*;
//! ```

// Core types
pub use crate::{AthanorError, Result, StreamId, Version};

// Query construction + materialization
pub use crate::{fetch_stream, fetch_stream_async, StreamReadQuery};

// Collaborators
pub use crate::{CancelToken, IdentityMap, ReadStatistics};

// Traits
pub use crate::{EventSelector, ReadCommand, RowCursor};

// Implementations
pub use crate::{JsonEventSelector, SqliteReadCommand, SqliteReadPool, StoredEvent};

// Configs
pub use crate::ReadPoolConfig;

// Re-export common external deps
pub use std::sync::Arc;
