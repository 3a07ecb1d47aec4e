//! Theme model: compiled-in defaults plus additive extension.
//!
//! The resolved theme is the token table the generator reads from. Extension
//! tokens are merged with the defaults, never replacing a whole scale.

pub mod color;
pub mod palette;
pub mod resolve;

pub use color::Color;
pub use resolve::ResolvedTheme;
