//! weft-storage: the SQLite build cache.
//!
//! Persists per-file scan metadata (mtime, content hash, extracted
//! candidates) between builds so unchanged files are never re-read, plus a
//! small build history table.

pub mod connection;
pub mod migrations;
pub mod queries;

pub use connection::CacheDb;
pub use queries::build_history::BuildHistoryRecord;
pub use queries::file_metadata::FileMetadataRecord;
