//! eleventy-export - Journal to static site exporter
//!
//! Converts plain-text journal entries into Markdown pages with YAML front
//! matter for the 11ty static site generator, one file per entry.

pub mod application;
pub mod cli;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod export;
pub mod infrastructure;

pub use error::ExportError;
