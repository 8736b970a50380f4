//! Output formatting utilities

use crate::application::ExportSummary;

/// Format the result of an export run for stdout
pub fn format_summary(summary: &ExportSummary) -> String {
    match summary {
        ExportSummary::Files { count, dir } => {
            let noun = if *count == 1 { "file" } else { "files" };
            format!("[Journal exported to {} {} in {}]\n", count, noun, dir.display())
        }
        ExportSummary::Document(text) => text.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_files() {
        let summary = ExportSummary::Files {
            count: 3,
            dir: PathBuf::from("site"),
        };
        assert_eq!(format_summary(&summary), "[Journal exported to 3 files in site]\n");
    }

    #[test]
    fn test_format_single_file() {
        let summary = ExportSummary::Files {
            count: 1,
            dir: PathBuf::from("site"),
        };
        assert_eq!(format_summary(&summary), "[Journal exported to 1 file in site]\n");
    }

    #[test]
    fn test_format_document() {
        let summary = ExportSummary::Document("text\n".to_string());
        assert_eq!(format_summary(&summary), "text\n");
    }
}
