//! Stylesheet output settings.

use serde::{Deserialize, Serialize};

/// Configuration for the generated stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the generated stylesheet, relative to the project root.
    /// Default: `weft.css`.
    pub path: Option<String>,
    /// Emit minified CSS. Default: false.
    pub minify: Option<bool>,
}

impl OutputConfig {
    /// Returns the effective output path, defaulting to `weft.css`.
    pub fn effective_path(&self) -> &str {
        self.path.as_deref().unwrap_or("weft.css")
    }

    /// Returns whether output is minified, defaulting to false.
    pub fn effective_minify(&self) -> bool {
        self.minify.unwrap_or(false)
    }
}
