//! Tag symbols, tag extraction and tag-only line detection

use crate::error::{ExportError, Result};
use regex::Regex;

/// Characters accepted after a tag symbol
const TAG_BODY: &str = r"[-+*#/\w]+";

/// The configured set of characters that mark a word as a tag
///
/// Holds the regexes derived from the symbol set, compiled once at
/// construction so every later match is infallible.
#[derive(Debug, Clone)]
pub struct TagSymbols {
    symbols: String,
    tag: Regex,
    tag_only_line: Regex,
}

impl TagSymbols {
    pub fn new(symbols: &str) -> Result<Self> {
        if symbols.is_empty() {
            return Err(ExportError::Config(
                "tagsymbols must not be empty".to_string(),
            ));
        }

        let class = format!("[{}]", regex::escape(symbols));
        let tag = Regex::new(&format!(r"(?:^|\s)({class}{TAG_BODY})"))
            .map_err(|e| ExportError::Config(format!("Invalid tagsymbols '{}': {}", symbols, e)))?;
        let tag_only_line = Regex::new(&format!(r"^\s*({class}{TAG_BODY}\s*)+$"))
            .map_err(|e| ExportError::Config(format!("Invalid tagsymbols '{}': {}", symbols, e)))?;

        Ok(TagSymbols {
            symbols: symbols.to_string(),
            tag,
            tag_only_line,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Check whether a line holds nothing but tags
    pub fn is_tag_only_line(&self, line: &str) -> bool {
        self.tag_only_line.is_match(line)
    }

    /// Extract tags (symbol included) in first-seen order, lowercased and deduplicated
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for cap in self.tag.captures_iter(text) {
            let tag = cap[1].to_lowercase();
            // `## Heading` markers match the pattern but carry no name
            if !strip_symbol(&tag).chars().any(char::is_alphanumeric) {
                continue;
            }
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

impl Default for TagSymbols {
    fn default() -> Self {
        TagSymbols::new("#@").expect("default tag symbols are valid")
    }
}

impl PartialEq for TagSymbols {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

/// Remove the leading tag symbol from a tag
pub fn strip_symbol(tag: &str) -> &str {
    let mut chars = tag.chars();
    chars.next();
    chars.as_str()
}
