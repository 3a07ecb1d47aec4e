//! Extraction types.

/// Statistics about an extraction pass.
#[derive(Debug, Clone, Default)]
pub struct ExtractStats {
    /// Files whose content was tokenized.
    pub files_processed: usize,
    /// Files answered from the in-process extraction cache.
    pub cache_hits: usize,
    /// Files reused from the previous build without a read.
    pub files_reused: usize,
    /// Unique candidates across all files.
    pub unique_candidates: usize,
}
