//! Content hashing via xxh3.

use xxhash_rust::xxh3::xxh3_64;

/// Compute the xxh3 64-bit hash of file content.
#[inline]
pub fn hash_content(content: &[u8]) -> u64 {
    xxh3_64(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let data = b"<div class=\"bg-brand\"></div>";
        assert_eq!(hash_content(data), hash_content(data));
    }

    #[test]
    fn content_sensitive() {
        assert_ne!(
            hash_content(b"<div class=\"bg-brand\">"),
            hash_content(b"<div class=\"bg-brand-dark\">")
        );
    }
}
