//! Configuration system for weft.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod output_config;
pub mod scan_settings;
pub mod theme_config;
pub mod weft_config;

pub use output_config::OutputConfig;
pub use scan_settings::ScanSettings;
pub use theme_config::{ColorValue, ThemeConfig, ThemeExtension};
pub use weft_config::{CliOverrides, WeftConfig, PROJECT_CONFIG_FILE};
