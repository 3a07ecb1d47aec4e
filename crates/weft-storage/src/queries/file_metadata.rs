//! file_metadata queries: load all, upsert, remove.

use rusqlite::{params, Connection};

use weft_core::errors::StorageError;

use crate::connection::sqlite_err;

/// A cached per-file record.
///
/// `content_hash` is the xxh3 value stored as its i64 bit pattern (SQLite
/// has no unsigned 64-bit integer).
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadataRecord {
    pub path: String,
    pub content_hash: i64,
    pub mtime_secs: i64,
    pub mtime_nanos: i64,
    pub file_size: i64,
    pub kind: Option<String>,
    pub candidates_json: String,
    pub last_built_at: i64,
}

impl FileMetadataRecord {
    /// Decode the candidates payload.
    pub fn candidates(&self) -> Result<Vec<String>, StorageError> {
        serde_json::from_str(&self.candidates_json).map_err(|e| StorageError::CorruptEntry {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Encode a candidates list for storage.
    pub fn encode_candidates(candidates: &[String]) -> String {
        serde_json::to_string(candidates).unwrap_or_else(|_| "[]".to_string())
    }
}

/// Load every cached file record.
pub fn load_all(conn: &Connection) -> Result<Vec<FileMetadataRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT path, content_hash, mtime_secs, mtime_nanos, file_size,
                    kind, candidates_json, last_built_at
             FROM file_metadata",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(FileMetadataRecord {
                path: row.get(0)?,
                content_hash: row.get(1)?,
                mtime_secs: row.get(2)?,
                mtime_nanos: row.get(3)?,
                file_size: row.get(4)?,
                kind: row.get(5)?,
                candidates_json: row.get(6)?,
                last_built_at: row.get(7)?,
            })
        })
        .map_err(sqlite_err)?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(sqlite_err)?);
    }
    Ok(records)
}

/// Insert or replace a file record.
pub fn upsert(conn: &Connection, record: &FileMetadataRecord) -> Result<(), StorageError> {
    conn.execute(
        "INSERT OR REPLACE INTO file_metadata
         (path, content_hash, mtime_secs, mtime_nanos, file_size,
          kind, candidates_json, last_built_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.path,
            record.content_hash,
            record.mtime_secs,
            record.mtime_nanos,
            record.file_size,
            record.kind,
            record.candidates_json,
            record.last_built_at,
        ],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Remove a file record by path.
pub fn remove(conn: &Connection, path: &str) -> Result<(), StorageError> {
    conn.execute("DELETE FROM file_metadata WHERE path = ?1", params![path])
        .map_err(sqlite_err)?;
    Ok(())
}

/// Count cached file records.
pub fn count(conn: &Connection) -> Result<i64, StorageError> {
    conn.query_row("SELECT COUNT(*) FROM file_metadata", [], |row| row.get(0))
        .map_err(sqlite_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CacheDb;

    fn record(path: &str) -> FileMetadataRecord {
        FileMetadataRecord {
            path: path.to_string(),
            content_hash: 0x1234_5678,
            mtime_secs: 1_700_000_000,
            mtime_nanos: 42,
            file_size: 128,
            kind: Some("HTML".to_string()),
            candidates_json: FileMetadataRecord::encode_candidates(&[
                "bg-brand".to_string(),
                "p-4".to_string(),
            ]),
            last_built_at: 1_700_000_001,
        }
    }

    #[test]
    fn upsert_load_remove_round_trip() {
        let db = CacheDb::open_in_memory().unwrap();

        db.with_conn(|conn| upsert(conn, &record("home/templates/index.html")))
            .unwrap();
        db.with_conn(|conn| upsert(conn, &record("home/templates/about.html")))
            .unwrap();

        let all = db.with_conn(load_all).unwrap();
        assert_eq!(all.len(), 2);

        let first = all
            .iter()
            .find(|r| r.path == "home/templates/index.html")
            .unwrap();
        assert_eq!(
            first.candidates().unwrap(),
            vec!["bg-brand".to_string(), "p-4".to_string()]
        );

        db.with_conn(|conn| remove(conn, "home/templates/index.html"))
            .unwrap();
        assert_eq!(db.with_conn(count).unwrap(), 1);
    }

    #[test]
    fn upsert_replaces_existing_path() {
        let db = CacheDb::open_in_memory().unwrap();

        let mut rec = record("a.html");
        db.with_conn(|conn| upsert(conn, &rec)).unwrap();
        rec.content_hash = 99;
        db.with_conn(|conn| upsert(conn, &rec)).unwrap();

        let all = db.with_conn(load_all).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content_hash, 99);
    }

    #[test]
    fn corrupt_candidates_payload_is_reported() {
        let mut rec = record("a.html");
        rec.candidates_json = "not json".to_string();
        assert!(matches!(
            rec.candidates(),
            Err(StorageError::CorruptEntry { .. })
        ));
    }
}
