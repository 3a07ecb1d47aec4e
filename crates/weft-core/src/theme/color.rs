//! Color value parsing and validation.

use std::fmt;
use std::str::FromStr;

use crate::errors::ThemeError;

/// A validated CSS color value.
///
/// Theme tokens carry their author-written text through to the generated
/// stylesheet, so the original string is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Color {
    /// Hex form: `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
    Hex(String),
    /// A recognized keyword: `transparent`, `currentColor`, `inherit`.
    Keyword(String),
}

/// Keywords accepted as color values.
const COLOR_KEYWORDS: &[&str] = &["transparent", "currentColor", "inherit"];

impl Color {
    /// Parse and validate a color string.
    pub fn parse(token: &str, value: &str) -> Result<Color, ThemeError> {
        if value.is_empty() {
            return Err(ThemeError::EmptyValue {
                token: token.to_string(),
            });
        }

        if let Some(digits) = value.strip_prefix('#') {
            let valid_len = matches!(digits.len(), 3 | 4 | 6 | 8);
            if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Ok(Color::Hex(value.to_string()));
            }
            return Err(ThemeError::InvalidColor {
                token: token.to_string(),
                value: value.to_string(),
            });
        }

        if COLOR_KEYWORDS.contains(&value) {
            return Ok(Color::Keyword(value.to_string()));
        }

        Err(ThemeError::InvalidColor {
            token: token.to_string(),
            value: value.to_string(),
        })
    }

    /// The CSS text of the color, exactly as authored.
    pub fn as_str(&self) -> &str {
        match self {
            Color::Hex(s) | Color::Keyword(s) => s,
        }
    }
}

impl FromStr for Color {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse("<anonymous>", s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
