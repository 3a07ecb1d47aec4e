//! Error handling for weft.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod build_error;
pub mod config_error;
pub mod extract_error;
pub mod plugin_error;
pub mod scan_error;
pub mod storage_error;
pub mod theme_error;

pub use build_error::{BuildError, BuildErrors};
pub use config_error::ConfigError;
pub use extract_error::ExtractError;
pub use plugin_error::PluginError;
pub use scan_error::ScanError;
pub use storage_error::StorageError;
pub use theme_error::ThemeError;
