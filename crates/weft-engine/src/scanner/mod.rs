//! Scanner subsystem: content-glob file discovery and change detection.
//!
//! The scanner is the entry point of the build. It walks the project root,
//! keeps files matching the configured content globs, prunes ignored
//! directories, and classifies each file against the previous build's cache
//! so unchanged files are never re-read.

pub mod content_kind;
pub mod hasher;
pub mod ignores;
pub mod incremental;
pub mod types;
pub mod walker;

pub use content_kind::ContentKind;
pub use incremental::{classify_file, compute_diff};
pub use types::{
    CachedFileMeta, DiscoveredFile, FileStatus, ScanDiff, ScanEntry, ScanOptions, ScanStats,
};
pub use walker::Scanner;
