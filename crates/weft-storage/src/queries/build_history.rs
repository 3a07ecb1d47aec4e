//! build_history queries: insert, recent.

use rusqlite::{params, Connection};

use weft_core::errors::StorageError;

use crate::connection::sqlite_err;

/// One build invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildHistoryRecord {
    pub started_at: i64,
    pub duration_ms: i64,
    pub files_scanned: i64,
    pub files_reused: i64,
    pub candidates: i64,
    pub rules_emitted: i64,
}

/// Record a finished build.
pub fn insert(conn: &Connection, record: &BuildHistoryRecord) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO build_history
         (started_at, duration_ms, files_scanned, files_reused, candidates, rules_emitted)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.started_at,
            record.duration_ms,
            record.files_scanned,
            record.files_reused,
            record.candidates,
            record.rules_emitted,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// The most recent builds, newest first.
pub fn recent(conn: &Connection, limit: usize) -> Result<Vec<BuildHistoryRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT started_at, duration_ms, files_scanned, files_reused,
                    candidates, rules_emitted
             FROM build_history
             ORDER BY started_at DESC, id DESC
             LIMIT ?1",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(BuildHistoryRecord {
                started_at: row.get(0)?,
                duration_ms: row.get(1)?,
                files_scanned: row.get(2)?,
                files_reused: row.get(3)?,
                candidates: row.get(4)?,
                rules_emitted: row.get(5)?,
            })
        })
        .map_err(sqlite_err)?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(sqlite_err)?);
    }
    Ok(records)
}
