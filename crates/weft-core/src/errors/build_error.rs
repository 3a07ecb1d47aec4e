//! Build errors and non-fatal error collection.

use super::{ConfigError, ExtractError, PluginError, ScanError, StorageError, ThemeError};

/// Errors that can occur during a build.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Plugin error: {0}")]
    Plugin(#[from] PluginError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Non-fatal errors accumulated during a build.
/// Allows partial results to be returned even when some files fail.
#[derive(Debug, Default)]
pub struct BuildErrors {
    errors: Vec<BuildError>,
}

impl BuildErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-fatal error.
    pub fn push(&mut self, error: impl Into<BuildError>) {
        self.errors.push(error.into());
    }

    /// Returns true if no errors were collected.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the collection, returning the errors.
    pub fn into_vec(self) -> Vec<BuildError> {
        self.errors
    }

    /// Iterate over collected errors.
    pub fn iter(&self) -> impl Iterator<Item = &BuildError> {
        self.errors.iter()
    }
}
