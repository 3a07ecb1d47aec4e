//! Theme errors.

/// Errors that can occur while resolving the theme.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Invalid color for token '{token}': {value}")]
    InvalidColor { token: String, value: String },

    #[error("Empty value for token '{token}'")]
    EmptyValue { token: String },

    #[error("Color scale '{token}' has no entries")]
    EmptyScale { token: String },
}
