//! Utility families: class prefix to CSS properties to token namespace.

use weft_core::theme::ResolvedTheme;

use super::escape::class_selector;
use super::rules::{Rule, Stylesheet};

/// The token namespace a family draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    Color,
    Spacing,
}

/// One utility family: a class prefix mapped to CSS properties.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    pub prefix: &'static str,
    pub properties: &'static [&'static str],
    pub namespace: Namespace,
}

/// All utility families, in output order.
///
/// Longest-prefix matching is handled at lookup time (`px-` wins over `p-`),
/// so the order here is purely the order families appear in the stylesheet.
pub const FAMILIES: &[Family] = &[
    Family { prefix: "bg-", properties: &["background-color"], namespace: Namespace::Color },
    Family { prefix: "text-", properties: &["color"], namespace: Namespace::Color },
    Family { prefix: "border-", properties: &["border-color"], namespace: Namespace::Color },
    Family { prefix: "p-", properties: &["padding"], namespace: Namespace::Spacing },
    Family { prefix: "px-", properties: &["padding-left", "padding-right"], namespace: Namespace::Spacing },
    Family { prefix: "py-", properties: &["padding-top", "padding-bottom"], namespace: Namespace::Spacing },
    Family { prefix: "pt-", properties: &["padding-top"], namespace: Namespace::Spacing },
    Family { prefix: "pr-", properties: &["padding-right"], namespace: Namespace::Spacing },
    Family { prefix: "pb-", properties: &["padding-bottom"], namespace: Namespace::Spacing },
    Family { prefix: "pl-", properties: &["padding-left"], namespace: Namespace::Spacing },
    Family { prefix: "m-", properties: &["margin"], namespace: Namespace::Spacing },
    Family { prefix: "mx-", properties: &["margin-left", "margin-right"], namespace: Namespace::Spacing },
    Family { prefix: "my-", properties: &["margin-top", "margin-bottom"], namespace: Namespace::Spacing },
    Family { prefix: "mt-", properties: &["margin-top"], namespace: Namespace::Spacing },
    Family { prefix: "mr-", properties: &["margin-right"], namespace: Namespace::Spacing },
    Family { prefix: "mb-", properties: &["margin-bottom"], namespace: Namespace::Spacing },
    Family { prefix: "ml-", properties: &["margin-left"], namespace: Namespace::Spacing },
];

/// Class prefixes the extractor prefilters on.
pub fn family_prefixes() -> Vec<&'static str> {
    FAMILIES.iter().map(|f| f.prefix).collect()
}

/// Statistics about a generation pass.
#[derive(Debug, Clone, Default)]
pub struct GenerateStats {
    /// Rules emitted into the stylesheet.
    pub rules_emitted: usize,
    /// Candidates that matched no family or no token.
    pub candidates_skipped: usize,
}

/// Match one candidate against the families and the resolved theme.
///
/// Longest matching prefix wins, so `px-4` is padding-x rather than `p-`
/// with an unknown token. Returns the family index for ordering.
fn match_candidate(theme: &ResolvedTheme, candidate: &str) -> Option<(usize, Rule)> {
    // Variants and arbitrary values are tolerated by the extractor but not
    // generated.
    if candidate.contains(':') || candidate.contains('[') {
        return None;
    }

    let mut best: Option<(usize, &Family, &str)> = None;
    for (idx, family) in FAMILIES.iter().enumerate() {
        if let Some(token) = candidate.strip_prefix(family.prefix) {
            if token.is_empty() {
                continue;
            }
            match best {
                Some((_, current, _)) if current.prefix.len() >= family.prefix.len() => {}
                _ => best = Some((idx, family, token)),
            }
        }
    }

    let (idx, family, token) = best?;
    let value = match family.namespace {
        Namespace::Color => theme.color(token)?,
        Namespace::Spacing => theme.spacing(token)?,
    };

    let mut rule = Rule::new(class_selector(candidate));
    for property in family.properties {
        rule = rule.declare(*property, value);
    }
    Some((idx, rule))
}

/// Generate the stylesheet for a set of candidates.
///
/// `candidates` must be deduplicated; order does not matter. Output is
/// deterministic: rules are sorted by (family, token).
pub fn generate_stylesheet(
    theme: &ResolvedTheme,
    candidates: &[String],
    static_rules: Vec<Rule>,
) -> (Stylesheet, GenerateStats) {
    let mut stats = GenerateStats::default();
    let mut matched: Vec<(usize, String, Rule)> = Vec::new();

    for candidate in candidates {
        match match_candidate(theme, candidate) {
            Some((family_idx, rule)) => {
                matched.push((family_idx, candidate.clone(), rule));
            }
            None => stats.candidates_skipped += 1,
        }
    }

    matched.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));

    let mut sheet = Stylesheet::new();
    for rule in static_rules {
        sheet.push(rule);
    }
    for (_, _, rule) in matched {
        sheet.push(rule);
    }
    stats.rules_emitted = sheet.len();

    (sheet, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use weft_core::config::{ColorValue, ThemeExtension};

    fn theme_with_brand() -> ResolvedTheme {
        let mut shades = BTreeMap::new();
        shades.insert("DEFAULT".to_string(), "#4a6cf7".to_string());
        shades.insert("dark".to_string(), "#3453e6".to_string());

        let mut colors = BTreeMap::new();
        colors.insert("brand".to_string(), ColorValue::Scale(shades));
        colors.insert(
            "surface".to_string(),
            ColorValue::Single("#111827".to_string()),
        );

        ResolvedTheme::resolve(&ThemeExtension {
            colors,
            spacing: BTreeMap::new(),
        })
        .unwrap()
    }

    fn candidates(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn brand_default_produces_exact_hex() {
        let theme = theme_with_brand();
        let (sheet, stats) =
            generate_stylesheet(&theme, &candidates(&["bg-brand"]), Vec::new());

        assert_eq!(stats.rules_emitted, 1);
        assert_eq!(
            sheet.render(true),
            ".bg-brand{background-color:#4a6cf7}"
        );
    }

    #[test]
    fn extension_does_not_disturb_default_palette() {
        let theme = theme_with_brand();
        let (sheet, _) = generate_stylesheet(
            &theme,
            &candidates(&["bg-brand", "text-gray-500", "border-brand-dark"]),
            Vec::new(),
        );

        let css = sheet.render(true);
        assert!(css.contains(".bg-brand{background-color:#4a6cf7}"));
        // Default palette entry keeps its default value.
        assert!(css.contains(".text-gray-500{color:#6b7280}"));
        assert!(css.contains(".border-brand-dark{border-color:#3453e6}"));
    }

    #[test]
    fn longest_prefix_wins() {
        let theme = ResolvedTheme::defaults();
        let (sheet, _) = generate_stylesheet(&theme, &candidates(&["px-4"]), Vec::new());
        assert_eq!(
            sheet.render(true),
            ".px-4{padding-left:1rem;padding-right:1rem}"
        );
    }

    #[test]
    fn unknown_candidates_are_skipped_and_counted() {
        let theme = ResolvedTheme::defaults();
        let (sheet, stats) = generate_stylesheet(
            &theme,
            &candidates(&["bg-nonexistent", "lorem", "hover:bg-gray-100", "bg-[#fff]"]),
            Vec::new(),
        );
        assert!(sheet.is_empty());
        assert_eq!(stats.candidates_skipped, 4);
    }

    #[test]
    fn output_order_is_deterministic() {
        let theme = ResolvedTheme::defaults();
        let forward = candidates(&["m-4", "bg-gray-100", "p-2", "text-white"]);
        let mut backward = forward.clone();
        backward.reverse();

        let (a, _) = generate_stylesheet(&theme, &forward, Vec::new());
        let (b, _) = generate_stylesheet(&theme, &backward, Vec::new());
        assert_eq!(a, b);

        // Colors come before spacing, per family order.
        let css = a.render(true);
        let bg = css.find(".bg-gray-100").unwrap();
        let p = css.find(".p-2").unwrap();
        assert!(bg < p);
    }

    #[test]
    fn static_rules_lead_the_sheet() {
        let theme = ResolvedTheme::defaults();
        let preamble = Rule::new(".sr-only").declare("position", "absolute");
        let (sheet, _) =
            generate_stylesheet(&theme, &candidates(&["p-2"]), vec![preamble]);
        assert!(sheet.render(true).starts_with(".sr-only{position:absolute}"));
    }
}
