//! Content scan settings.

use serde::{Deserialize, Serialize};

/// Configuration for the content scanner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanSettings {
    /// Maximum file size to read, in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Worker threads for hashing and extraction. Default: 0 (auto).
    pub threads: Option<usize>,
    /// Ignore patterns applied on top of the built-in defaults.
    #[serde(default)]
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links while walking. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanSettings {
    /// Returns the effective maximum file size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    /// Returns whether symlinks are followed, defaulting to false.
    pub fn effective_follow_symlinks(&self) -> bool {
        self.follow_symlinks.unwrap_or(false)
    }
}
