//! Theme resolution: flatten defaults, then layer the extension on top.

use std::collections::BTreeMap;

use crate::config::ThemeExtension;
use crate::errors::ThemeError;
use crate::theme::color::Color;
use crate::theme::palette::{DEFAULT_COLOR_SCALES, DEFAULT_SINGLE_COLORS, DEFAULT_SPACING};

/// The fully resolved token table the generator reads from.
///
/// Tokens are flattened: a scale entry `brand.dark` becomes `brand-dark`,
/// and the `DEFAULT` shade becomes the bare scale name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// Color token to CSS color text.
    pub colors: BTreeMap<String, String>,
    /// Spacing token to CSS length.
    pub spacing: BTreeMap<String, String>,
}

impl ResolvedTheme {
    /// Resolve the default tokens with no extension.
    pub fn defaults() -> Self {
        let mut colors = BTreeMap::new();
        for (token, value) in DEFAULT_SINGLE_COLORS {
            colors.insert((*token).to_string(), (*value).to_string());
        }
        for (scale, shades) in DEFAULT_COLOR_SCALES {
            for (shade, value) in *shades {
                colors.insert(format!("{scale}-{shade}"), (*value).to_string());
            }
        }

        let mut spacing = BTreeMap::new();
        for (token, value) in DEFAULT_SPACING {
            spacing.insert((*token).to_string(), (*value).to_string());
        }

        Self { colors, spacing }
    }

    /// Resolve defaults plus an extension.
    ///
    /// Strict addition: every default token survives; an extension token with
    /// the same name overrides only that token. Extension colors are
    /// validated before insertion.
    pub fn resolve(extension: &ThemeExtension) -> Result<Self, ThemeError> {
        let mut theme = Self::defaults();

        for (name, value) in &extension.colors {
            let flat = value.flatten(name);
            if flat.is_empty() {
                return Err(ThemeError::EmptyScale {
                    token: name.clone(),
                });
            }
            for (token, raw) in flat {
                let color = Color::parse(&token, raw)?;
                theme.colors.insert(token, color.as_str().to_string());
            }
        }

        for (token, value) in &extension.spacing {
            if value.is_empty() {
                return Err(ThemeError::EmptyValue {
                    token: token.clone(),
                });
            }
            theme.spacing.insert(token.clone(), value.clone());
        }

        Ok(theme)
    }

    /// Look up a color token.
    pub fn color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    /// Look up a spacing token.
    pub fn spacing(&self, token: &str) -> Option<&str> {
        self.spacing.get(token).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::config::ColorValue;
    use crate::theme::palette::default_color_token_count;

    fn brand_extension() -> ThemeExtension {
        let mut shades = BTreeMap::new();
        shades.insert("DEFAULT".to_string(), "#4a6cf7".to_string());
        shades.insert("dark".to_string(), "#3453e6".to_string());

        let mut colors = BTreeMap::new();
        colors.insert("brand".to_string(), ColorValue::Scale(shades));
        colors.insert(
            "surface".to_string(),
            ColorValue::Single("#111827".to_string()),
        );

        ThemeExtension {
            colors,
            spacing: BTreeMap::new(),
        }
    }

    #[test]
    fn defaults_flatten_scales() {
        let theme = ResolvedTheme::defaults();
        assert_eq!(theme.color("gray-900"), Some("#111827"));
        assert_eq!(theme.color("white"), Some("#ffffff"));
        assert_eq!(theme.spacing("4"), Some("1rem"));
        assert_eq!(theme.colors.len(), default_color_token_count());
    }

    #[test]
    fn extension_is_strict_addition() {
        let defaults = ResolvedTheme::defaults();
        let theme = ResolvedTheme::resolve(&brand_extension()).unwrap();

        // Every default token survives the merge.
        for token in defaults.colors.keys() {
            assert!(
                theme.colors.contains_key(token),
                "default token '{}' was removed by the extension",
                token
            );
        }

        // Extension tokens are added with their exact values.
        assert_eq!(theme.color("brand"), Some("#4a6cf7"));
        assert_eq!(theme.color("brand-dark"), Some("#3453e6"));
        assert_eq!(theme.color("surface"), Some("#111827"));
    }

    #[test]
    fn extension_overrides_only_the_named_token() {
        let mut colors = BTreeMap::new();
        colors.insert(
            "gray-500".to_string(),
            ColorValue::Single("#123456".to_string()),
        );
        let ext = ThemeExtension {
            colors,
            spacing: BTreeMap::new(),
        };

        let theme = ResolvedTheme::resolve(&ext).unwrap();
        assert_eq!(theme.color("gray-500"), Some("#123456"));
        // Neighboring shades keep their default values.
        assert_eq!(theme.color("gray-400"), Some("#9ca3af"));
        assert_eq!(theme.color("gray-600"), Some("#4b5563"));
    }

    #[test]
    fn invalid_extension_color_is_rejected() {
        let mut colors = BTreeMap::new();
        colors.insert(
            "brand".to_string(),
            ColorValue::Single("not-a-color".to_string()),
        );
        let ext = ThemeExtension {
            colors,
            spacing: BTreeMap::new(),
        };
        assert!(ResolvedTheme::resolve(&ext).is_err());
    }

    #[test]
    fn spacing_extension_merges() {
        let mut spacing = BTreeMap::new();
        spacing.insert("18".to_string(), "4.5rem".to_string());
        let ext = ThemeExtension {
            colors: BTreeMap::new(),
            spacing,
        };

        let theme = ResolvedTheme::resolve(&ext).unwrap();
        assert_eq!(theme.spacing("18"), Some("4.5rem"));
        assert_eq!(theme.spacing("4"), Some("1rem"));
    }
}
