//! Markdown documents with YAML front matter
//!
//! The front matter block has a fixed shape and is assembled as text; no
//! YAML serializer is involved.

use std::fmt;

pub const FRONT_MATTER_DELIMITER: &str = "---";
pub const ENTRY_LAYOUT: &str = "entries";

/// Characters removed from titles before they go into front matter
const TITLE_STRIPPED_CHARS: [char; 2] = ['@', ':'];

/// Remove the characters that would break the unquoted `title:` value
///
/// Only `@` and `:` are removed. Other YAML-significant characters pass
/// through untouched.
pub fn sanitize_title(title: &str) -> String {
    title.replace(TITLE_STRIPPED_CHARS, "")
}

/// An insertion-ordered set of tags
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, ignoring duplicates
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

/// Equality ignores insertion order
impl PartialEq for TagSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|t| other.contains(t))
    }
}

impl Eq for TagSet {}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Renders as a YAML flow sequence of single-quoted strings
impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tag) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", tag.replace('\'', "''"))?;
        }
        write!(f, "]")
    }
}

/// One exported entry: front matter fields followed by a Markdown body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatterDocument {
    pub title: String,
    pub date: String,
    pub starred: bool,
    pub layout: &'static str,
    pub tags: TagSet,
    pub permalink: String,
    pub body: String,
}

impl FrontMatterDocument {
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FrontMatterDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", FRONT_MATTER_DELIMITER)?;
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "date: {}", self.date)?;
        writeln!(f, "starred: {}", self.starred)?;
        writeln!(f, "layout: \"{}\"", self.layout)?;
        writeln!(f, "tags: {}", self.tags)?;
        writeln!(f, "permalink: \"{}\"", self.permalink)?;
        writeln!(f)?;
        writeln!(f, "{}", FRONT_MATTER_DELIMITER)?;
        writeln!(f, "## {}", self.title)?;
        write!(f, "{}", self.body)
    }
}
