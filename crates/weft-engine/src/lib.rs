//! weft-engine: the build engine behind the `weft` CLI.
//!
//! One build invocation flows through four subsystems:
//! - Scanner: walks the project, matching files against the configured
//!   content globs while honoring ignore rules
//! - Extract: pulls utility-class candidates out of matched files
//! - Plugins: named extension points contributing tokens and static rules
//! - Generate: turns theme tokens plus candidates into a stylesheet
//!
//! `Pipeline` ties them together and accumulates non-fatal errors.

pub mod extract;
pub mod generate;
pub mod pipeline;
pub mod plugins;
pub mod scanner;

// Re-exports for convenience
pub use extract::{CandidateExtractor, ExtractionCache};
pub use generate::{Declaration, Rule, Stylesheet};
pub use pipeline::{BuildReport, BuildStats, PersistEntry, Pipeline};
pub use plugins::{Plugin, PluginRegistry};
pub use scanner::{
    CachedFileMeta, ContentKind, FileStatus, ScanDiff, ScanEntry, ScanOptions, ScanStats,
    Scanner,
};
