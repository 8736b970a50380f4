//! Journal and entry models

use super::tags::TagSymbols;
use crate::error::{ExportError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use std::fmt::Write;
use std::sync::{Arc, OnceLock};

pub const DEFAULT_JOURNAL_NAME: &str = "default";
pub const DEFAULT_TIMEFORMAT: &str = "%Y-%m-%d %H:%M";
pub const DEFAULT_TAGSYMBOLS: &str = "#@";

/// A validated strftime pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat(String);

impl TimeFormat {
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
        {
            return Err(ExportError::Config(format!(
                "Invalid timeformat: '{}'",
                pattern
            )));
        }

        // Offsets and zone names cannot be rendered for a naive datetime
        let sample = NaiveDateTime::default();
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(pattern)).map_err(|_| {
            ExportError::Config(format!(
                "Invalid timeformat: '{}' needs a time zone",
                pattern
            ))
        })?;

        Ok(TimeFormat(pattern.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn format(&self, date: &NaiveDateTime) -> String {
        let mut out = String::new();
        // `new` already rendered this pattern once, so writing cannot fail
        let _ = write!(out, "{}", date.format(&self.0));
        out
    }

    /// Parse a date; patterns without a time of day yield midnight
    pub fn parse(&self, text: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(text, &self.0)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, &self.0)
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat(DEFAULT_TIMEFORMAT.to_string())
    }
}

/// Options a journal carries that affect export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalConfig {
    pub timeformat: TimeFormat,
    pub tagsymbols: TagSymbols,
}

/// Journal identity shared by all of its entries
#[derive(Debug, Clone, PartialEq)]
pub struct JournalInfo {
    pub name: String,
    pub config: JournalConfig,
}

impl JournalInfo {
    pub fn new(name: impl Into<String>, config: JournalConfig) -> Arc<Self> {
        Arc::new(JournalInfo {
            name: name.into(),
            config,
        })
    }
}

/// Separator between an entry's title and its body
fn title_separator() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\n|[?!.]+ +\n?").unwrap())
}

/// A single journal entry
#[derive(Debug, Clone)]
pub struct Entry {
    journal: Arc<JournalInfo>,
    date: NaiveDateTime,
    title: String,
    body: String,
    starred: bool,
    tags: Vec<String>,
}

impl Entry {
    /// Create an entry; tags are collected from title and body
    pub fn new(
        journal: Arc<JournalInfo>,
        date: NaiveDateTime,
        title: impl Into<String>,
        body: impl Into<String>,
        starred: bool,
    ) -> Self {
        let title = title.into();
        let body = body.into();
        let tags = journal
            .config
            .tagsymbols
            .extract(&format!("{} {}", title, body));

        Entry {
            journal,
            date,
            title,
            body,
            starred,
            tags,
        }
    }

    /// Create an entry from the raw text following its date header
    ///
    /// The title runs up to the first newline or sentence end; a `*` at
    /// either end of the title stars the entry.
    pub fn from_text(journal: Arc<JournalInfo>, date: NaiveDateTime, text: &str) -> Self {
        let raw = text.trim();
        let (title, body) = match title_separator().find(raw) {
            Some(sep) => (&raw[..sep.end()], &raw[sep.end()..]),
            None => (raw, ""),
        };

        let mut title = title.trim();
        let mut starred = false;
        if let Some(rest) = title.strip_suffix('*') {
            starred = true;
            title = rest.trim_end();
        }
        if let Some(rest) = title.strip_prefix('*') {
            starred = true;
            title = rest.trim_start();
        }

        Entry::new(journal, date, title, body.trim(), starred)
    }

    pub fn journal(&self) -> &JournalInfo {
        &self.journal
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn starred(&self) -> bool {
        self.starred
    }

    /// Tags with their leading symbol
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// A named journal and its entries
#[derive(Debug, Clone)]
pub struct Journal {
    info: Arc<JournalInfo>,
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new(info: Arc<JournalInfo>) -> Self {
        Journal {
            info,
            entries: Vec::new(),
        }
    }

    pub fn info(&self) -> &Arc<JournalInfo> {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Order entries by date, keeping file order for equal dates
    pub fn sort(&mut self) {
        self.entries.sort_by_key(|e| e.date);
    }
}
