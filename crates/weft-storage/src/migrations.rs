//! Schema migrations, gated on `PRAGMA user_version`.

use rusqlite::Connection;
use tracing::debug;

use weft_core::errors::StorageError;

use crate::connection::sqlite_err;

/// Current schema version.
pub const SCHEMA_VERSION: i64 = 1;

/// V1: file_metadata and build_history.
const V001_SQL: &str = r#"
-- File metadata: the foundation for incremental builds.
CREATE TABLE IF NOT EXISTS file_metadata (
    path TEXT PRIMARY KEY,
    content_hash INTEGER NOT NULL,
    mtime_secs INTEGER NOT NULL,
    mtime_nanos INTEGER NOT NULL,
    file_size INTEGER NOT NULL,
    kind TEXT,
    candidates_json TEXT NOT NULL,
    last_built_at INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_file_metadata_built
    ON file_metadata(last_built_at);

-- One row per build invocation.
CREATE TABLE IF NOT EXISTS build_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    started_at INTEGER NOT NULL,
    duration_ms INTEGER NOT NULL,
    files_scanned INTEGER NOT NULL,
    files_reused INTEGER NOT NULL,
    candidates INTEGER NOT NULL,
    rules_emitted INTEGER NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_build_history_started
    ON build_history(started_at);
"#;

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let version: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(sqlite_err)?;

    if version < 1 {
        debug!(from = version, to = 1, "migrating build cache schema");
        conn.execute_batch(V001_SQL)
            .map_err(|e| StorageError::MigrationFailed {
                version: 1,
                message: e.to_string(),
            })?;
        conn.pragma_update(None, "user_version", 1)
            .map_err(|e| StorageError::MigrationFailed {
                version: 1,
                message: e.to_string(),
            })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();

        let version: i64 = conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }
}
