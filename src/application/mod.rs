//! Application layer - Use cases and orchestration

pub mod export_journal;

pub use export_journal::{ExportOptions, ExportService, ExportSummary};
