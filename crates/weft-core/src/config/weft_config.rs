//! Top-level weft configuration with 4-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{OutputConfig, ScanSettings, ThemeConfig};
use crate::errors::ConfigError;
use crate::theme::Color;

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "weft.toml";

/// Top-level configuration.
///
/// The three declarative fields the build consumes:
/// - `content`: glob patterns selecting the files scanned for class usage
/// - `theme`: additive extension of the default design tokens
/// - `plugins`: ordered plugin references (may be empty)
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`WEFT_*`)
/// 3. Project config (`weft.toml` in project root)
/// 4. User config (`~/.weft/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeftConfig {
    pub content: Vec<String>,
    pub theme: ThemeConfig,
    pub plugins: Vec<String>,
    pub scan: ScanSettings,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_path: Option<String>,
    pub minify: Option<bool>,
    pub scan_max_file_size: Option<u64>,
    pub scan_threads: Option<usize>,
}

impl WeftConfig {
    /// Load configuration with 4-layer resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. CLI flags
    /// 2. Environment variables (`WEFT_*`)
    /// 3. Project config (`weft.toml` in `root`)
    /// 4. User config (`~/.weft/config.toml`)
    /// 5. Compiled defaults
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(_) => {
                        // Non-parse errors from user config are warnings, not fatal.
                        // Continue with defaults.
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            debug!(path = %project_config_path.display(), "loading project config");
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &WeftConfig) -> Result<(), ConfigError> {
        for (i, pattern) in config.content.iter().enumerate() {
            if pattern.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("content[{i}]"),
                    message: "pattern must not be empty".to_string(),
                });
            }
            if let Err(e) = globset::Glob::new(pattern.trim_start_matches("./")) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("content[{i}]"),
                    message: format!("invalid glob '{pattern}': {e}"),
                });
            }
        }

        for (name, value) in &config.theme.extend.colors {
            for (token, raw) in value.flatten(name) {
                if Color::parse(&token, raw).is_err() {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("theme.extend.colors.{token}"),
                        message: format!("invalid color value '{raw}'"),
                    });
                }
            }
        }

        for (token, value) in &config.theme.extend.spacing {
            if value.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("theme.extend.spacing.{token}"),
                    message: "spacing value must not be empty".to_string(),
                });
            }
        }

        for (i, name) in config.plugins.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("plugins[{i}]"),
                    message: "plugin reference must not be empty".to_string(),
                });
            }
        }

        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        if let Some(ref path) = config.output.path {
            if path.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "output.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the user config path: `~/.weft/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut WeftConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: WeftConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` actually sets them.
    fn merge(base: &mut WeftConfig, other: &WeftConfig) {
        // Content globs replace as a whole: the pattern list is ordered and
        // per-pattern merging would scramble it.
        if !other.content.is_empty() {
            base.content = other.content.clone();
        }

        // Theme tokens merge per key: a later layer overrides single tokens,
        // not whole categories.
        for (name, value) in &other.theme.extend.colors {
            base.theme
                .extend
                .colors
                .insert(name.clone(), value.clone());
        }
        for (token, value) in &other.theme.extend.spacing {
            base.theme
                .extend
                .spacing
                .insert(token.clone(), value.clone());
        }

        if !other.plugins.is_empty() {
            base.plugins = other.plugins.clone();
        }

        // Scan
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.follow_symlinks.is_some() {
            base.scan.follow_symlinks = other.scan.follow_symlinks;
        }

        // Output
        if other.output.path.is_some() {
            base.output.path = other.output.path.clone();
        }
        if other.output.minify.is_some() {
            base.output.minify = other.output.minify;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `WEFT_SCAN_MAX_FILE_SIZE`, `WEFT_OUTPUT_PATH`, etc.
    fn apply_env_overrides(config: &mut WeftConfig) {
        if let Ok(val) = std::env::var("WEFT_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WEFT_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("WEFT_OUTPUT_PATH") {
            if !val.is_empty() {
                config.output.path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("WEFT_OUTPUT_MINIFY") {
            if let Ok(v) = val.parse::<bool>() {
                config.output.minify = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut WeftConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.output_path {
            config.output.path = Some(v.clone());
        }
        if let Some(v) = cli.minify {
            config.output.minify = Some(v);
        }
        if let Some(v) = cli.scan_max_file_size {
            config.scan.max_file_size = Some(v);
        }
        if let Some(v) = cli.scan_threads {
            config.scan.threads = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level weft config directory: `~/.weft/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".weft"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
