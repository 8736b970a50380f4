//! File system repository
//!
//! Reads plain-text journals, either a single file or a folder of `.txt`
//! files, and writes exported entries into a target directory.

use crate::domain::{Entry, Journal, JournalInfo, TimeFormat};
use crate::error::{ExportError, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// Abstract source of journal entries
pub trait JournalRepository {
    /// Path the journal is read from
    fn path(&self) -> &Path;

    /// Read every entry of the journal
    fn load_journal(&self, info: Arc<JournalInfo>) -> Result<Journal>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub path: PathBuf,
}

impl FileSystemRepository {
    /// Open an existing journal file or folder
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            return Err(ExportError::JournalNotFound(path));
        }
        Ok(FileSystemRepository { path })
    }

    /// Whether this is a folder journal
    pub fn is_folder(&self) -> bool {
        self.path.is_dir()
    }

    /// Journal files of a folder journal in path order, hidden directories skipped
    fn folder_files(&self) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        walker
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect()
    }
}

impl JournalRepository for FileSystemRepository {
    fn path(&self) -> &Path {
        &self.path
    }

    fn load_journal(&self, info: Arc<JournalInfo>) -> Result<Journal> {
        let mut journal = Journal::new(info.clone());

        let files = if self.is_folder() {
            self.folder_files()
        } else {
            vec![self.path.clone()]
        };

        for file in files {
            let text = fs::read_to_string(&file)?;
            for entry in parse_entries(&info, &text) {
                journal.push(entry);
            }
        }

        journal.sort();
        Ok(journal)
    }
}

/// Parse a `[date] text` header line into its date and the text after it
fn parse_header<'a>(line: &'a str, timeformat: &TimeFormat) -> Option<(NaiveDateTime, &'a str)> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    let date = timeformat.parse(&rest[..end])?;
    let text = &rest[end + 1..];
    Some((date, text.strip_prefix(' ').unwrap_or(text)))
}

/// Split plain journal text into entries
///
/// Each entry starts at a line `[<date>] ...` whose date parses with the
/// journal's time format. Text before the first such line is ignored.
pub fn parse_entries(info: &Arc<JournalInfo>, text: &str) -> Vec<Entry> {
    let timeformat = &info.config.timeformat;
    let mut entries = Vec::new();
    let mut current: Option<(NaiveDateTime, String)> = None;

    for line in text.split_inclusive('\n') {
        if let Some((date, rest)) = parse_header(line, timeformat) {
            if let Some((date, raw)) = current.take() {
                entries.push(Entry::from_text(info.clone(), date, &raw));
            }
            current = Some((date, rest.to_string()));
        } else if let Some((_, raw)) = current.as_mut() {
            raw.push_str(line);
        }
    }

    if let Some((date, raw)) = current {
        entries.push(Entry::from_text(info.clone(), date, &raw));
    }

    entries
}

/// Directory exported entries are written to
#[derive(Debug, Clone)]
pub struct ExportTarget {
    pub dir: PathBuf,
}

impl ExportTarget {
    /// Create the target directory if needed
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if dir.exists() && !dir.is_dir() {
            return Err(ExportError::Config(format!(
                "Export target is not a directory: {}",
                dir.display()
            )));
        }
        fs::create_dir_all(&dir)?;
        Ok(ExportTarget { dir })
    }

    /// Write one exported file, replacing any file of the same name
    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JournalConfig;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn info() -> Arc<JournalInfo> {
        JournalInfo::new("default", JournalConfig::default())
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    const JOURNAL: &str = "\
preamble is ignored
[2025-01-17 09:30] Morning pages. Wrote a lot.
## Ideas
[not a date] stays in the body
#writing

[2025-01-18 21:00] Starred evening *
Quiet.
";

    #[test]
    fn test_parse_entries() {
        let entries = parse_entries(&info(), JOURNAL);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].date(), at(2025, 1, 17, 9, 30));
        assert_eq!(entries[0].title(), "Morning pages.");
        assert_eq!(
            entries[0].body(),
            "Wrote a lot.\n## Ideas\n[not a date] stays in the body\n#writing"
        );
        assert_eq!(entries[0].tags(), &["#writing"]);

        assert_eq!(entries[1].title(), "Starred evening");
        assert!(entries[1].starred());
        assert_eq!(entries[1].body(), "Quiet.");
    }

    #[test]
    fn test_parse_date_only_headers() {
        let config = JournalConfig {
            timeformat: TimeFormat::new("%Y-%m-%d").unwrap(),
            ..JournalConfig::default()
        };
        let info = JournalInfo::new("default", config);

        let entries = parse_entries(&info, "[2025-01-17] Hello\nbody\n[2025-01-18] Next\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date(), at(2025, 1, 17, 0, 0));
        assert_eq!(entries[0].title(), "Hello");
        assert_eq!(entries[0].body(), "body");
        assert_eq!(entries[1].date(), at(2025, 1, 18, 0, 0));
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_entries(&info(), "").is_empty());
        assert!(parse_entries(&info(), "no headers here\n").is_empty());
    }

    #[test]
    fn test_parse_header() {
        let fmt = TimeFormat::default();
        assert_eq!(
            parse_header("[2025-01-17 09:30] Title\n", &fmt),
            Some((at(2025, 1, 17, 9, 30), "Title\n"))
        );
        assert_eq!(parse_header("[2025-01-17] Title", &fmt), None);
        assert_eq!(parse_header("2025-01-17 09:30 Title", &fmt), None);
    }

    #[test]
    fn test_open_missing_journal() {
        let temp = TempDir::new().unwrap();
        match FileSystemRepository::open(temp.path().join("missing.txt")).unwrap_err() {
            ExportError::JournalNotFound(_) => {}
            other => panic!("Expected JournalNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_file_journal_sorted() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.txt");
        fs::write(
            &path,
            "[2025-02-01 10:00] Later\n[2025-01-01 10:00] Earlier\n",
        )
        .unwrap();

        let repo = FileSystemRepository::open(&path).unwrap();
        assert!(!repo.is_folder());
        let journal = repo.load_journal(info()).unwrap();
        let titles: Vec<&str> = journal.entries().iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["Earlier", "Later"]);
    }

    #[test]
    fn test_load_folder_journal() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("2025/01")).unwrap();
        fs::create_dir_all(temp.path().join(".hidden")).unwrap();
        fs::write(
            temp.path().join("2025/01/18.txt"),
            "[2025-01-18 08:00] Second\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("2025/01/17.txt"),
            "[2025-01-17 08:00] First\n",
        )
        .unwrap();
        fs::write(
            temp.path().join(".hidden/x.txt"),
            "[2025-01-01 08:00] Hidden\n",
        )
        .unwrap();
        fs::write(temp.path().join("notes.md"), "[2025-01-01 08:00] Not txt\n").unwrap();

        let repo = FileSystemRepository::open(temp.path()).unwrap();
        assert!(repo.is_folder());
        let journal = repo.load_journal(info()).unwrap();
        let titles: Vec<&str> = journal.entries().iter().map(|e| e.title()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_export_target_writes_and_overwrites() {
        let temp = TempDir::new().unwrap();
        let target = ExportTarget::create(temp.path().join("out/nested")).unwrap();

        let path = target.write("a.md", "one").unwrap();
        target.write("a.md", "two").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "two");
    }

    #[test]
    fn test_export_target_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(ExportTarget::create(&file).is_err());
    }
}
