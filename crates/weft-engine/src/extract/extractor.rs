//! Class-name candidate extraction.
//!
//! Content files are not parsed: candidates are flat tokens. An Aho-Corasick
//! automaton over the known utility prefixes locates hits, each hit is
//! expanded to full token boundaries, and the token is validated before
//! collection.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;
use regex::Regex;
use rustc_hash::FxHashSet;

use weft_core::errors::ExtractError;

use crate::generate::utilities::family_prefixes;

/// Shape of an acceptable candidate token.
static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Starts with a letter; continues with token characters. Anchored on the
    // whole token, so partially-expanded garbage is rejected.
    Regex::new(r"^[A-Za-z][A-Za-z0-9:/._%#\[\]-]*$").unwrap()
});

/// Extracts utility-class candidates from text content.
pub struct CandidateExtractor {
    prefilter: AhoCorasick,
    roots: Vec<&'static str>,
}

impl CandidateExtractor {
    /// Build the extractor from the known utility prefixes.
    pub fn new() -> Result<Self, ExtractError> {
        let roots = family_prefixes();
        let prefilter = AhoCorasick::new(&roots)
            .map_err(|e| ExtractError::AutomatonBuild(e.to_string()))?;
        Ok(Self { prefilter, roots })
    }

    /// Extract candidates from one file's content.
    ///
    /// Returns a sorted, deduplicated list. Variant-prefixed tokens
    /// (`hover:bg-brand`) are kept; the generator decides what to do with
    /// them.
    pub fn extract(&self, content: &str) -> Vec<String> {
        let bytes = content.as_bytes();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        for hit in self.prefilter.find_iter(content) {
            let (start, end) = expand_token(bytes, hit.start(), hit.end());

            // The prefix must start a token or a variant segment, otherwise
            // words like "rp-4" in prose would produce a candidate.
            if !segment_starts_at(bytes, start, hit.start()) {
                continue;
            }

            let Ok(token) = std::str::from_utf8(&bytes[start..end]) else {
                continue;
            };
            if !CANDIDATE_RE.is_match(token) {
                continue;
            }
            if !self.base_has_known_root(token) {
                continue;
            }
            if !seen.contains(token) {
                seen.insert(token.to_string());
            }
        }

        let mut out: Vec<String> = seen.into_iter().collect();
        out.sort();
        out
    }

    /// The base segment (after any variants) must start with a known root
    /// and carry a non-empty token after it.
    fn base_has_known_root(&self, token: &str) -> bool {
        let base = token.rsplit(':').next().unwrap_or(token);
        self.roots
            .iter()
            .any(|root| base.len() > root.len() && base.starts_with(root))
    }
}

/// Characters that may appear inside a candidate token.
#[inline]
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b':' | b'/' | b'.' | b'[' | b']' | b'%' | b'#')
}

/// Expand a prefix hit to full token boundaries.
fn expand_token(bytes: &[u8], hit_start: usize, hit_end: usize) -> (usize, usize) {
    let mut start = hit_start;
    while start > 0 && is_token_byte(bytes[start - 1]) {
        start -= 1;
    }
    let mut end = hit_end;
    while end < bytes.len() && is_token_byte(bytes[end]) {
        end += 1;
    }
    (start, end)
}

/// A hit is a candidate only when the matched prefix begins the token or a
/// `:`-separated variant segment.
fn segment_starts_at(bytes: &[u8], token_start: usize, hit_start: usize) -> bool {
    hit_start == token_start || bytes[hit_start - 1] == b':'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str) -> Vec<String> {
        CandidateExtractor::new().unwrap().extract(content)
    }

    #[test]
    fn extracts_from_html_class_attribute() {
        let html = r#"<div class="bg-brand text-white p-4">hi</div>"#;
        assert_eq!(extract(html), vec!["bg-brand", "p-4", "text-white"]);
    }

    #[test]
    fn deduplicates_across_the_file() {
        let html = r#"<a class="bg-brand"></a><b class="bg-brand"></b>"#;
        assert_eq!(extract(html), vec!["bg-brand"]);
    }

    #[test]
    fn keeps_variant_tokens_whole() {
        let html = r#"<div class="hover:bg-brand-dark"></div>"#;
        assert_eq!(extract(html), vec!["hover:bg-brand-dark"]);
    }

    #[test]
    fn ignores_mid_word_hits() {
        // "warp-40" contains "p-4" but is not a class token.
        let html = r#"<span data-x="warp-40">sharp-text-500</span>"#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn bare_prefix_is_not_a_candidate() {
        assert!(extract(r#"class="bg- p-""#).is_empty());
    }

    #[test]
    fn tolerates_arbitrary_values() {
        let html = r#"<div class="bg-[#4a6cf7]"></div>"#;
        assert_eq!(extract(html), vec!["bg-[#4a6cf7]"]);
    }

    #[test]
    fn handles_template_syntax_and_unicode() {
        let html = "<p class=\"text-gray-700\">naïve café {{ user.name }}</p>";
        assert_eq!(extract(html), vec!["text-gray-700"]);
    }

    #[test]
    fn extracts_from_js_string_literals() {
        let js = r#"el.className = 'mx-2 mt-1';"#;
        assert_eq!(extract(js), vec!["mt-1", "mx-2"]);
    }
}
