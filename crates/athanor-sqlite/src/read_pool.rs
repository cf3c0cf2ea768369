//! SQLite read connection pool
//!
//! SQLite needs separate connections for true read concurrency, so the
//! pool opens a fixed set of read-only connections and admits readers
//! through a semaphore. Acquiring a connection is the await point of the
//! suspension-capable read path; everything after it is a synchronous
//! fetch loop with cooperative cancellation.

use athanor_core::{
    error::{AthanorError, Result},
    ReadPoolConfig,
};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::{Semaphore, SemaphorePermit};

/// A pooled read-only connection
///
/// The semaphore permit is released when this guard drops, returning the
/// connection to the pool.
pub struct PooledConnection<'a> {
    conn: std::sync::MutexGuard<'a, Connection>,
    _permit: SemaphorePermit<'a>,
}

impl std::fmt::Debug for PooledConnection<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledConnection").finish_non_exhaustive()
    }
}

impl PooledConnection<'_> {
    /// The underlying read-only connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Fixed-size pool of read-only SQLite connections
pub struct SqliteReadPool {
    connections: Vec<Mutex<Connection>>,
    semaphore: Semaphore,
    acquire_timeout: Duration,
}

impl std::fmt::Debug for SqliteReadPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteReadPool")
            .field("pool_size", &self.connections.len())
            .field("acquire_timeout", &self.acquire_timeout)
            .finish_non_exhaustive()
    }
}

impl SqliteReadPool {
    /// Open `config.pool_size` read-only connections to the database at
    /// `db_path`
    pub fn open(db_path: &Path, config: ReadPoolConfig) -> Result<Self> {
        let pool_size = if config.enabled { config.pool_size } else { 1 };
        if pool_size == 0 {
            return Err(AthanorError::Config(
                "read pool size must be at least 1".into(),
            ));
        }

        let mut connections = Vec::with_capacity(pool_size);
        for _ in 0..pool_size {
            let conn = Connection::open_with_flags(
                db_path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| AthanorError::Backend(e.to_string()))?;
            connections.push(Mutex::new(conn));
        }

        tracing::debug!(
            "opened read pool of {} connections on {}",
            pool_size,
            db_path.display()
        );

        Ok(Self {
            connections,
            semaphore: Semaphore::new(pool_size),
            acquire_timeout: Duration::from_millis(config.acquire_timeout_ms),
        })
    }

    /// Acquire a pooled connection, waiting up to the configured timeout
    pub async fn acquire(&self) -> Result<PooledConnection<'_>> {
        let permit = tokio::time::timeout(self.acquire_timeout, self.semaphore.acquire())
            .await
            .map_err(|_| {
                AthanorError::Timeout(format!(
                    "read pool acquire timeout after {:?}",
                    self.acquire_timeout
                ))
            })?
            .map_err(|e| AthanorError::Internal(format!("semaphore closed: {}", e)))?;

        // The permit guarantees a free connection exists
        for conn in &self.connections {
            if let Ok(guard) = conn.try_lock() {
                return Ok(PooledConnection {
                    conn: guard,
                    _permit: permit,
                });
            }
        }

        Err(AthanorError::Internal(
            "no free connection despite holding a permit".into(),
        ))
    }

    /// Acquire a pooled connection without waiting
    ///
    /// Returns `None` if every connection is in use.
    pub fn try_acquire(&self) -> Result<Option<PooledConnection<'_>>> {
        let permit = match self.semaphore.try_acquire() {
            Ok(permit) => permit,
            Err(_) => return Ok(None),
        };

        for conn in &self.connections {
            if let Ok(guard) = conn.try_lock() {
                return Ok(Some(PooledConnection {
                    conn: guard,
                    _permit: permit,
                }));
            }
        }
        Ok(None)
    }

    /// Number of connections currently free
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Total number of connections in the pool
    pub fn pool_size(&self) -> usize {
        self.connections.len()
    }
}
