//! Journal export use case
//!
//! Loads a journal, hands it to the selected exporter and writes the
//! results out.

use crate::diagnostics::Diagnostics;
use crate::domain::JournalInfo;
use crate::error::{ExportError, Result};
use crate::export::exporter_for;
use crate::infrastructure::repository::JournalRepository;
use crate::infrastructure::{Config, ExportTarget};
use std::path::PathBuf;

/// Options for an export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Export format name (e.g. "11ty")
    pub format: String,

    /// Directory for one file per entry (None = single document)
    pub output: Option<PathBuf>,

    /// Config file (None = discover next to the journal)
    pub config: Option<PathBuf>,

    /// Journal name overriding the configured one
    pub name: Option<String>,
}

/// What an export run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportSummary {
    /// Entries written as individual files
    Files { count: usize, dir: PathBuf },
    /// The whole journal as one document
    Document(String),
}

/// Service for exporting journals
pub struct ExportService<R: JournalRepository> {
    repository: R,
}

impl<R: JournalRepository> ExportService<R> {
    /// Create new export service
    pub fn new(repository: R) -> Self {
        ExportService { repository }
    }

    /// Execute the export
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The format is unknown
    /// - The config cannot be loaded or is invalid
    /// - The exporter refuses the export (the reason went to `diag`)
    /// - File I/O fails
    pub fn execute(
        &self,
        options: ExportOptions,
        diag: &mut Diagnostics<'_>,
    ) -> Result<ExportSummary> {
        // 1. Resolve exporter
        let exporter = exporter_for(&options.format)
            .ok_or_else(|| ExportError::UnknownFormat(options.format.clone()))?;

        // 2. Load config
        let config = match &options.config {
            Some(path) => Config::load(path)?,
            None => Config::discover(self.repository.path())?,
        };
        let name = options.name.unwrap_or_else(|| config.name.clone());
        let info = JournalInfo::new(name, config.journal_config()?);

        // 3. Load entries
        let journal = self.repository.load_journal(info)?;

        // 4. Export
        let Some(dir) = options.output else {
            return exporter
                .export_journal(&journal, diag)
                .map(ExportSummary::Document)
                .ok_or(ExportError::ExportRefused(options.format));
        };

        let target = ExportTarget::create(dir)?;
        for entry in journal.entries() {
            let content = exporter
                .export_entry(entry, true, diag)
                .ok_or_else(|| ExportError::ExportRefused(options.format.clone()))?;
            target.write(&exporter.make_filename(entry), &content)?;
        }

        Ok(ExportSummary::Files {
            count: journal.entries().len(),
            dir: target.dir,
        })
    }
}
