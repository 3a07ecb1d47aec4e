//! CSS selector escaping for class names.
//!
//! Candidates may carry characters that are not CSS identifier characters
//! (`.`, `/`, `:`, `[`, `]`, `%`). Those must be backslash-escaped when the
//! class name becomes a selector.

/// Escape a class name for use in a class selector (without the leading dot).
pub fn escape_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for (i, c) in name.chars().enumerate() {
        let is_ident = c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();
        // A leading digit is not a valid identifier start; escape it as a
        // code point per the CSS serialization algorithm.
        if i == 0 && c.is_ascii_digit() {
            out.push_str(&format!("\\3{c} "));
        } else if is_ident {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    out
}

/// Build a class selector (with the leading dot) from a class name.
pub fn class_selector(name: &str) -> String {
    format!(".{}", escape_class(name))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn plain_names_pass_through() {
        assert_eq!(escape_class("bg-brand"), "bg-brand");
        assert_eq!(class_selector("bg-brand"), ".bg-brand");
    }

    #[test]
    fn specials_are_backslash_escaped() {
        assert_eq!(escape_class("w-1/2"), "w-1\\/2");
        assert_eq!(escape_class("p-2.5"), "p-2\\.5");
        assert_eq!(escape_class("hover:bg-brand"), "hover\\:bg-brand");
        assert_eq!(escape_class("bg-[#fff]"), "bg-\\[\\#fff\\]");
    }

    #[test]
    fn leading_digit_is_code_point_escaped() {
        assert_eq!(escape_class("2xl"), "\\32 xl");
    }

    proptest! {
        /// Every character of the input survives escaping, and every
        /// non-identifier ASCII character is preceded by a backslash.
        #[test]
        fn escaping_preserves_and_guards(name in "[a-z][a-zA-Z0-9:/._%\\[\\]-]{0,30}") {
            let escaped = escape_class(&name);

            // Unescaping by dropping backslashes recovers the input.
            let unescaped: String = escaped.chars().filter(|c| *c != '\\').collect();
            prop_assert_eq!(unescaped.replace(' ', ""), name.replace(' ', ""));

            // No bare special characters remain.
            let mut prev_backslash = false;
            for c in escaped.chars() {
                if !prev_backslash && matches!(c, '.' | '/' | ':' | '[' | ']' | '%' | '#') {
                    prop_assert!(false, "unescaped special '{}' in {}", c, escaped);
                }
                prev_backslash = c == '\\' && !prev_backslash;
            }
        }
    }
}
