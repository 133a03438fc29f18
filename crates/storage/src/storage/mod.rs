//! `SQLite` storage implementation.
//!
//! All methods are synchronous; async callers wrap them in `spawn_blocking`.

// SQLite uses i64 for counts/limits, Rust uses usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod annotations;
mod profiles;

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use argo_core::{DEFAULT_DB_POOL_SIZE, env_parse_with_default};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::StorageError;
use crate::schema;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping a `SQLite` connection pool.
///
/// Cloning is cheap; clones share the pool and the profile table guard.
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
    path: PathBuf,
    /// Write side held by `replace_profiles`, read side by profile queries.
    profiles_guard: Arc<RwLock<()>>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Connection initializer for concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("ARGO_DB_POOL_SIZE", DEFAULT_DB_POOL_SIZE).max(1)
}

impl Storage {
    /// Open (or create) the store at `db_path`.
    ///
    /// The annotations schema is ensured before the handle is returned, so
    /// no caller ever queries a missing annotations table.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or the schema cannot be created.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let storage = Self {
            pool,
            path: db_path.to_path_buf(),
            profiles_guard: Arc::new(RwLock::new(())),
        };
        storage.ensure_annotations_schema()?;

        tracing::info!(
            path = %db_path.display(),
            pool_size,
            "Storage initialized with connection pool"
        );

        Ok(storage)
    }

    /// Location of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the `annotations` table and its index if absent.
    ///
    /// Idempotent; never touches existing rows.
    ///
    /// # Errors
    /// Returns error if the DDL fails.
    pub fn ensure_annotations_schema(&self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        schema::ensure_annotations(&conn)?;
        Ok(())
    }

    fn read_profiles_guard(&self) -> Result<RwLockReadGuard<'_, ()>, StorageError> {
        self.profiles_guard.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write_profiles_guard(&self) -> Result<RwLockWriteGuard<'_, ()>, StorageError> {
        self.profiles_guard.write().map_err(|_| StorageError::LockPoisoned)
    }
}
