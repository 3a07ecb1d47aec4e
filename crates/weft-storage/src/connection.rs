//! Connection management for the build cache.
//!
//! A single serialized connection is plenty: one build process, one writer,
//! reads and writes interleaved on the same thread or behind the mutex.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::Connection;

use weft_core::errors::StorageError;

use crate::migrations;

/// The build cache database.
pub struct CacheDb {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl CacheDb {
    /// Open (or create) the cache at the given path, apply pragmas, and run
    /// migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::SqliteError {
                message: format!("failed to create {}: {}", parent.display(), e),
            })?;
        }

        let conn = Connection::open(path).map_err(sqlite_err)?;
        apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory cache (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        migrations::run_migrations(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
            path: None,
        })
    }

    /// Execute an operation with the serialized connection.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::SqliteError {
            message: "connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Path of the backing file, if the cache is on disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Apply connection pragmas for an on-disk cache.
fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.pragma_update(None, "journal_mode", "WAL")
        .map_err(sqlite_err)?;
    conn.pragma_update(None, "synchronous", "NORMAL")
        .map_err(sqlite_err)?;
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(sqlite_err)?;
    Ok(())
}

pub(crate) fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_creates_parent_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".weft/cache.db");
        let db = CacheDb::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(db.path(), Some(path.as_path()));
    }

    #[test]
    fn in_memory_cache_migrates() {
        let db = CacheDb::open_in_memory().unwrap();
        let version: i64 = db
            .with_conn(|conn| {
                conn.query_row("PRAGMA user_version", [], |row| row.get(0))
                    .map_err(sqlite_err)
            })
            .unwrap();
        assert!(version >= 1);
    }
}
