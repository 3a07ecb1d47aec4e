//! Candidate extraction errors.

/// Errors that can occur while extracting class-name candidates.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to build candidate prefilter: {0}")]
    AutomatonBuild(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}
