//! Slug derivation from free-form titles.
//!
//! # Responsibility
//! - Turn arbitrary title text into a URL-safe token.
//!
//! # Invariants
//! - Output contains only `[a-z0-9-]` with no separator runs.
//! - Output never exceeds [`SLUG_MAX_LEN`] characters.
//! - Same input always yields the same output.

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 50;

static NON_ALNUM_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug separator regex"));

/// Derives a URL-safe slug from title text.
///
/// Lower-cases the input, collapses every run of non-alphanumeric
/// characters to one `-`, strips leading/trailing separators and caps the
/// result at [`SLUG_MAX_LEN`] characters. Titles with no usable characters
/// reduce to an empty slug.
///
/// Uniqueness against the collection is not handled here; the repository
/// appends numeric suffixes when two titles reduce to the same slug.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let separated = NON_ALNUM_RUN_RE.replace_all(&lowered, "-");
    separated
        .trim_matches('-')
        .chars()
        .take(SLUG_MAX_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{slugify, SLUG_MAX_LEN};

    #[test]
    fn slugify_lowercases_and_joins_with_single_separators() {
        assert_eq!(
            slugify("Building Modern Web Applications with Next.js 14"),
            "building-modern-web-applications-with-next-js-14"
        );
        assert_eq!(slugify("Hello,   World!!!"), "hello-world");
    }

    #[test]
    fn slugify_strips_leading_and_trailing_separators() {
        assert_eq!(slugify("  --Edge Case-- "), "edge-case");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_caps_length() {
        let long_title = "word ".repeat(40);
        let slug = slugify(&long_title);
        assert!(slug.chars().count() <= SLUG_MAX_LEN);
    }

    #[test]
    fn slugify_is_deterministic() {
        let title = "Ünïcode & Symbols ~ Test";
        assert_eq!(slugify(title), slugify(title));
        assert!(slugify(title)
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }
}
