//! Plugin system: named extension points resolved from configuration.
//!
//! A plugin can add theme tokens and contribute static rules ahead of the
//! generated utilities. The registry ships empty; the common configuration
//! (`plugins = []`) resolves to no plugins.

use weft_core::errors::PluginError;
use weft_core::theme::ResolvedTheme;

use crate::generate::Rule;

/// A compiled-in plugin.
pub trait Plugin: Send + Sync {
    /// Name the configuration refers to this plugin by.
    fn name(&self) -> &'static str;

    /// Add or override theme tokens before generation.
    fn extend_theme(&self, _theme: &mut ResolvedTheme) {}

    /// Rules emitted ahead of the generated utilities.
    fn static_rules(&self) -> Vec<Rule> {
        Vec::new()
    }
}

/// Registry of available plugins.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin. Names must be unique.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), PluginError> {
        if self.plugins.iter().any(|p| p.name() == plugin.name()) {
            return Err(PluginError::Duplicate {
                name: plugin.name().to_string(),
            });
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Resolve configured plugin references, preserving their order.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<&dyn Plugin>, PluginError> {
        names
            .iter()
            .map(|name| {
                self.plugins
                    .iter()
                    .find(|p| p.name() == name)
                    .map(|p| p.as_ref())
                    .ok_or_else(|| PluginError::Unknown { name: name.clone() })
            })
            .collect()
    }
}
