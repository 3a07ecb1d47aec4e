//! Plugin resolution errors.

/// Errors that can occur while resolving configured plugins.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    #[error("Unknown plugin '{name}'")]
    Unknown { name: String },

    #[error("Plugin '{name}' registered twice")]
    Duplicate { name: String },
}
