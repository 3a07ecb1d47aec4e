//! Content scan errors.

/// Errors that can occur during content scanning.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid content pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Scan root does not exist: {path}")]
    RootNotFound { path: String },
}
