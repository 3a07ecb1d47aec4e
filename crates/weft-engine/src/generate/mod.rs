//! CSS generation: rule model, selector escaping, and utility families.
//!
//! Generation is candidate-driven: a rule is emitted only when a scanned
//! candidate parses as a known utility prefix plus a resolved theme token.

pub mod escape;
pub mod rules;
pub mod utilities;

pub use rules::{Declaration, Rule, Stylesheet};
pub use utilities::{generate_stylesheet, GenerateStats};
