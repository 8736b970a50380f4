//! Heading demotion for exported entry bodies
//!
//! Every heading in an entry body is pushed down one level so the body can
//! sit under the synthetic `## title` heading of the exported document.
//! Lines holding nothing but tags are dropped along the way.
//!
//! Setext headings are only recognised on the underline, so each line is
//! held back in `previous_line` until the next one has been classified.

use super::tags::TagSymbols;
use regex::Regex;
use std::sync::OnceLock;

/// Markdown supports headings up to this level
pub const MAX_HEADING_LEVEL: usize = 6;

fn atx_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^#+ ").unwrap())
}

fn setext_h1_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^=+$").unwrap())
}

fn setext_h2_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^-+$").unwrap())
}

/// How a single body line is treated, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Atx,
    SetextH1,
    SetextH2,
    TagsOnly,
    Text,
}

fn classify(line: &str, previous_line: &str, tagsymbols: &TagSymbols) -> LineKind {
    let underlines_text = !previous_line.trim().is_empty();
    let stripped = line.trim_end();

    if atx_regex().is_match(line) {
        LineKind::Atx
    } else if underlines_text && setext_h1_regex().is_match(stripped) {
        LineKind::SetextH1
    } else if underlines_text && setext_h2_regex().is_match(stripped) {
        LineKind::SetextH2
    } else if tagsymbols.is_tag_only_line(line) {
        LineKind::TagsOnly
    } else {
        LineKind::Text
    }
}

/// Result of demoting the headings of a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemotedBody {
    pub body: String,
    /// Set when some heading ended up deeper than [`MAX_HEADING_LEVEL`]
    pub overflow: bool,
}

/// Split text into lines, keeping each line's terminator
///
/// A line ends at `\n`, `\r\n` or a lone `\r`.
fn split_lines_inclusive(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\n', '\r']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

/// Demote every heading in `body` by one level and drop tag-only lines
pub fn demote_headings(body: &str, tagsymbols: &TagSymbols) -> DemotedBody {
    let mut output = String::with_capacity(body.len() + 16);
    let mut previous_line = "";
    let mut overflow = false;

    for line in split_lines_inclusive(body) {
        let mut current = line;

        match classify(line, previous_line, tagsymbols) {
            LineKind::Atx => {
                output.push_str(previous_line);
                output.push('#');
                output.push_str(line);
                let level = line.bytes().take_while(|&b| b == b'#').count() + 1;
                if level > MAX_HEADING_LEVEL {
                    overflow = true;
                }
                current = "";
            }
            LineKind::SetextH1 => {
                output.push_str("## ");
                output.push_str(previous_line);
                current = "";
            }
            LineKind::SetextH2 => {
                output.push_str("### ");
                output.push_str(previous_line);
                current = "";
            }
            LineKind::TagsOnly => {
                output.push_str(previous_line);
                current = "";
            }
            LineKind::Text => {
                output.push_str(previous_line);
            }
        }

        previous_line = current;
    }
    output.push_str(previous_line);

    if !output.ends_with('\n') && !output.ends_with('\r') {
        output.push('\n');
    }

    DemotedBody { body: output, overflow }
}
