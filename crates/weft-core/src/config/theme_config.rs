//! Theme configuration: additive extension of the default token scales.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Theme section of the configuration.
///
/// Only `extend` exists: extension values are merged with the framework
/// defaults, they never replace a default scale wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    pub extend: ThemeExtension,
}

/// Additive token extension, keyed by token category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ThemeExtension {
    /// Color tokens: name to color string or shade map.
    pub colors: BTreeMap<String, ColorValue>,
    /// Spacing tokens: name to CSS length.
    pub spacing: BTreeMap<String, String>,
}

impl ThemeExtension {
    /// Returns true if no extension tokens are configured.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.spacing.is_empty()
    }
}

/// A configured color: either a single value or a map of named shades.
///
/// The shade key `DEFAULT` names the bare token: `brand.DEFAULT` flattens
/// to the token `brand`, while `brand.dark` flattens to `brand-dark`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(String),
    Scale(BTreeMap<String, String>),
}

/// Shade key that flattens to the bare token name.
pub const DEFAULT_SHADE: &str = "DEFAULT";

impl ColorValue {
    /// Flatten this value into (token, value) pairs under `name`.
    pub fn flatten<'a>(&'a self, name: &'a str) -> Vec<(String, &'a str)> {
        match self {
            ColorValue::Single(value) => vec![(name.to_string(), value.as_str())],
            ColorValue::Scale(shades) => shades
                .iter()
                .map(|(shade, value)| {
                    let token = if shade == DEFAULT_SHADE {
                        name.to_string()
                    } else {
                        format!("{name}-{shade}")
                    };
                    (token, value.as_str())
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_flattens_to_bare_token() {
        let v = ColorValue::Single("#111827".to_string());
        assert_eq!(v.flatten("surface"), vec![("surface".to_string(), "#111827")]);
    }

    #[test]
    fn default_shade_flattens_to_bare_token() {
        let mut shades = BTreeMap::new();
        shades.insert("DEFAULT".to_string(), "#4a6cf7".to_string());
        shades.insert("dark".to_string(), "#3453e6".to_string());
        let v = ColorValue::Scale(shades);

        let flat = v.flatten("brand");
        assert!(flat.contains(&("brand".to_string(), "#4a6cf7")));
        assert!(flat.contains(&("brand-dark".to_string(), "#3453e6")));
    }

    #[test]
    fn deserializes_both_forms_from_toml() {
        let toml_str = r##"
[colors]
surface = "#111827"

[colors.brand]
DEFAULT = "#4a6cf7"
dark = "#3453e6"
"##;
        let ext: ThemeExtension = toml::from_str(toml_str).unwrap();
        assert_eq!(
            ext.colors.get("surface"),
            Some(&ColorValue::Single("#111827".to_string()))
        );
        match ext.colors.get("brand") {
            Some(ColorValue::Scale(shades)) => {
                assert_eq!(shades.get("DEFAULT").map(String::as_str), Some("#4a6cf7"));
                assert_eq!(shades.get("dark").map(String::as_str), Some("#3453e6"));
            }
            other => panic!("expected shade map, got: {:?}", other),
        }
    }
}
