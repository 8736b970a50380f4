//! Exporters turning journals into files

pub mod eleventy;

pub use eleventy::EleventyExporter;

use crate::diagnostics::Diagnostics;
use crate::domain::slug::slugify;
use crate::domain::{Entry, Journal};

/// A journal export format
pub trait Exporter {
    /// Names the format can be selected by
    fn names(&self) -> &'static [&'static str];

    /// File extension of exported files, without the dot
    fn extension(&self) -> &'static str;

    /// File name for an entry exported on its own
    fn make_filename(&self, entry: &Entry) -> String {
        format!("{}.{}", slugify(entry.title()), self.extension())
    }

    /// Export one entry
    ///
    /// `to_multifile` tells whether the entry will get a file of its own.
    /// Returns `None` when the format refuses the export; the reason has
    /// already been written to `diag`.
    fn export_entry(
        &self,
        entry: &Entry,
        to_multifile: bool,
        diag: &mut Diagnostics<'_>,
    ) -> Option<String>;

    /// Export a whole journal into a single document
    fn export_journal(&self, journal: &Journal, diag: &mut Diagnostics<'_>) -> Option<String>;
}

fn registry() -> Vec<Box<dyn Exporter>> {
    vec![Box::new(EleventyExporter)]
}

/// Find the exporter registered under `name`
pub fn exporter_for(name: &str) -> Option<Box<dyn Exporter>> {
    registry()
        .into_iter()
        .find(|exporter| exporter.names().contains(&name))
}

/// All format names that can be passed to [`exporter_for`]
pub fn available_formats() -> Vec<&'static str> {
    registry()
        .iter()
        .flat_map(|exporter| exporter.names().iter().copied())
        .collect()
}
