//! Slug derivation

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum slug length in characters
const MAX_SLUG_LEN: usize = 254;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Derive a URL-safe slug from a display title.
///
/// Lowercases, strips every character that is neither a word character nor
/// whitespace, collapses whitespace runs into single hyphens, and caps the
/// result at 254 characters. The caller is responsible for passing an
/// already-trimmed title.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");
    let hyphenated = WHITESPACE.replace_all(&stripped, "-");
    hyphenated.chars().take(MAX_SLUG_LEN).collect()
}
