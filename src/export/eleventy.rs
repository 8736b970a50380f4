//! Markdown with YAML front matter for the 11ty static site generator
//!
//! Every entry becomes its own page, so exporting a journal into a single
//! document is refused.

use super::Exporter;
use crate::diagnostics::Diagnostics;
use crate::domain::front_matter::{sanitize_title, FrontMatterDocument, TagSet, ENTRY_LAYOUT};
use crate::domain::headings::demote_headings;
use crate::domain::slug::slugify;
use crate::domain::tags::strip_symbol;
use crate::domain::{Entry, Journal};

const MULTIFILE_ONLY: &str =
    "YAML export must be to individual files. Please specify a directory to export to.";

#[derive(Debug, Clone, Copy, Default)]
pub struct EleventyExporter;

impl EleventyExporter {
    /// Build the document for an entry
    ///
    /// Emits a warning through `diag` when demoting the body pushed a
    /// heading past level 6; the document is still produced.
    pub fn build_document(
        &self,
        entry: &Entry,
        diag: &mut Diagnostics<'_>,
    ) -> FrontMatterDocument {
        let journal = entry.journal();
        let date = journal.config.timeformat.format(&entry.date());

        let body = if entry.body().is_empty() {
            String::new()
        } else {
            format!("\n{}", entry.body())
        };
        let demoted = demote_headings(&body, &journal.config.tagsymbols);

        if demoted.overflow {
            diag.warning(&format!(
                "Headings increased past H6 on export - {} {}",
                date,
                entry.title()
            ));
        }

        let mut tags = TagSet::new();
        tags.insert(journal.name.as_str());
        for tag in entry.tags() {
            tags.insert(strip_symbol(tag));
        }

        FrontMatterDocument {
            title: sanitize_title(entry.title()),
            date,
            starred: entry.starred(),
            layout: ENTRY_LAYOUT,
            tags,
            permalink: format!("{}/{}/", journal.name, slugify(entry.title())),
            body: demoted.body,
        }
    }
}

impl Exporter for EleventyExporter {
    fn names(&self) -> &'static [&'static str] {
        &["11ty"]
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn export_entry(
        &self,
        entry: &Entry,
        to_multifile: bool,
        diag: &mut Diagnostics<'_>,
    ) -> Option<String> {
        if !to_multifile {
            diag.error(MULTIFILE_ONLY);
            return None;
        }

        Some(self.build_document(entry, diag).render())
    }

    fn export_journal(&self, _journal: &Journal, diag: &mut Diagnostics<'_>) -> Option<String> {
        diag.error(MULTIFILE_ONLY);
        None
    }
}
