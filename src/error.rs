//! Error types for eleventy-export

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the exporter
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Journal not found: {0}")]
    JournalNotFound(PathBuf),

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("Export refused by format '{0}'")]
    ExportRefused(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ExportError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ExportError::JournalNotFound(_) => 2,
            ExportError::ExportRefused(_) => 3,
            ExportError::UnknownFormat(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ExportError::JournalNotFound(path) => {
                format!(
                    "Journal not found: {}\n\n\
                    Suggestions:\n\
                    • Pass the path of a plain-text journal file\n\
                    • Or pass a folder journal containing .txt files",
                    path.display()
                )
            }
            ExportError::UnknownFormat(name) => {
                format!(
                    "Unknown export format: '{}'\n\n\
                    Available formats: {}",
                    name,
                    crate::export::available_formats().join(", ")
                )
            }
            ExportError::ExportRefused(name) => {
                format!(
                    "Export refused by format '{}'\n\n\
                    Suggestions:\n\
                    • Use --output <DIR> to write one file per entry",
                    name
                )
            }
            ExportError::Config(msg) => {
                if msg.contains("timeformat") {
                    format!(
                        "{}\n\n\
                        Expected a strftime pattern\n\
                        Example: timeformat = \"%Y-%m-%d %H:%M\"",
                        msg
                    )
                } else if msg.contains("tagsymbols") {
                    format!(
                        "{}\n\n\
                        Expected one or more tag characters\n\
                        Example: tagsymbols = \"#@\"",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;
