//! Filename and URL safe slugs

use regex::Regex;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

fn punctuation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\w\s-]").unwrap())
}

fn separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[-\s]+").unwrap())
}

/// Turn arbitrary text into a lowercase, dash separated slug
///
/// Accents fold to their base letters and other non-ASCII characters are
/// dropped. Punctuation other than `-` and `_` is removed and runs of
/// whitespace or dashes collapse to a single `-`.
pub fn slugify(text: &str) -> String {
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();
    let cleaned = punctuation_regex().replace_all(&ascii, "");
    let lowered = cleaned.trim().to_lowercase();
    separator_regex().replace_all(&lowered, "-").into_owned()
}
