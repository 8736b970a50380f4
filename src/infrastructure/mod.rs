//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;

pub use config::Config;
pub use repository::{ExportTarget, FileSystemRepository, JournalRepository};
