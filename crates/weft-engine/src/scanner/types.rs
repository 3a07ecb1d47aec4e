//! Scanner types: options, discovered files, diff, and stats.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::content_kind::ContentKind;

/// Options controlling a content scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Project root the content globs are relative to.
    pub root: PathBuf,
    /// Content glob patterns (e.g. `./templates/**/*.html`).
    pub patterns: Vec<String>,
    /// Ignore patterns applied on top of the built-in defaults.
    pub extra_ignores: Vec<String>,
    /// Maximum file size to read (bytes).
    pub max_file_size: u64,
    /// Worker threads (0 = auto).
    pub threads: usize,
    /// Follow symbolic links while walking.
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            patterns: Vec::new(),
            extra_ignores: Vec::new(),
            max_file_size: 1_048_576,
            threads: 0,
            follow_symlinks: false,
        }
    }
}

/// A file found by the walker. Metadata only: nothing is read yet.
#[derive(Debug, Clone)]
pub struct DiscoveredFile {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// Last modification time.
    pub mtime: SystemTime,
    /// File size in bytes.
    pub file_size: u64,
    /// Detected content kind, if the extension is recognized.
    pub kind: Option<ContentKind>,
}

/// Change status of a file relative to the previous build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Unchanged,
}

/// Per-file record produced by classification.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub content_hash: u64,
    pub mtime_secs: i64,
    pub mtime_nanos: u32,
    pub file_size: u64,
    pub kind: Option<ContentKind>,
}

/// Cached metadata from the previous build, keyed by path.
#[derive(Debug, Clone)]
pub struct CachedFileMeta {
    pub content_hash: u64,
    pub mtime_secs: i64,
    pub mtime_nanos: u32,
    /// Candidates extracted when this file was last read.
    pub candidates: Vec<String>,
}

/// What changed since the previous build.
#[derive(Debug, Default)]
pub struct ScanDiff {
    pub added: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    /// Files present in the cache but no longer on disk.
    pub removed: Vec<PathBuf>,
    pub entries: FxHashMap<PathBuf, ScanEntry>,
    pub stats: ScanStats,
}

/// Statistics about a scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total files matched by the content globs.
    pub total_files: usize,
    /// Matched files grouped by content kind name.
    pub by_kind: HashMap<String, usize>,
    /// Total bytes across matched files.
    pub total_bytes: u64,
    /// Directories pruned by ignore rules.
    pub dirs_skipped: usize,
    /// Files skipped (ignored, too large).
    pub files_skipped: usize,
    /// Scan duration.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

// Duration serialized as milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
