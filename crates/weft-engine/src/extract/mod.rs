//! Candidate extraction: find tokens in content files that could be
//! utility classes.

pub mod cache;
pub mod extractor;
pub mod types;

pub use cache::ExtractionCache;
pub use extractor::CandidateExtractor;
pub use types::ExtractStats;
