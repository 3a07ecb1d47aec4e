//! weft-core: configuration, errors, and theme model for the weft engine.
//!
//! This crate provides the foundation shared by every other weft crate:
//! - Config: TOML configuration with layered resolution (content globs,
//!   theme extension, plugin list, scan and output settings)
//! - Errors: one error enum per subsystem, `thiserror` only
//! - Theme: compiled-in default design tokens plus additive extension

pub mod config;
pub mod errors;
pub mod theme;

// Re-exports for convenience
pub use config::{
    CliOverrides, ColorValue, OutputConfig, ScanSettings, ThemeConfig, ThemeExtension,
    WeftConfig,
};
pub use errors::{
    BuildError, ConfigError, ExtractError, PluginError, ScanError, StorageError, ThemeError,
};
pub use theme::{Color, ResolvedTheme};
