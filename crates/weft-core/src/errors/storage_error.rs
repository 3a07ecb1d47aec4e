//! Build cache storage errors.

/// Errors that can occur in the SQLite build cache.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration to version {version} failed: {message}")]
    MigrationFailed { version: i64, message: String },

    #[error("Corrupt cache entry for {path}: {message}")]
    CorruptEntry { path: String, message: String },
}
