//! Configuration management

use crate::domain::journal::{DEFAULT_JOURNAL_NAME, DEFAULT_TAGSYMBOLS, DEFAULT_TIMEFORMAT};
use crate::domain::{JournalConfig, TagSymbols, TimeFormat};
use crate::error::{ExportError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Journal settings as written in a TOML file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_timeformat")]
    pub timeformat: String,
    #[serde(default = "default_tagsymbols")]
    pub tagsymbols: String,
}

fn default_name() -> String {
    DEFAULT_JOURNAL_NAME.to_string()
}

fn default_timeformat() -> String {
    DEFAULT_TIMEFORMAT.to_string()
}

fn default_tagsymbols() -> String {
    DEFAULT_TAGSYMBOLS.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: default_name(),
            timeformat: default_timeformat(),
            tagsymbols: default_tagsymbols(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExportError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ExportError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    /// Find the config belonging to a journal
    ///
    /// A folder journal keeps `config.toml` inside it; a journal file keeps
    /// `<stem>.toml` next to it. Without either the defaults apply.
    pub fn discover(journal_path: &Path) -> Result<Self> {
        match Self::config_path_for(journal_path) {
            Some(path) => Self::load(&path),
            None => Ok(Config::default()),
        }
    }

    fn config_path_for(journal_path: &Path) -> Option<PathBuf> {
        let candidate = if journal_path.is_dir() {
            journal_path.join("config.toml")
        } else {
            journal_path.with_extension("toml")
        };

        (candidate.is_file() && candidate != journal_path).then_some(candidate)
    }

    /// Validate the raw values into the journal's export settings
    pub fn journal_config(&self) -> Result<JournalConfig> {
        Ok(JournalConfig {
            timeformat: TimeFormat::new(&self.timeformat)?,
            tagsymbols: TagSymbols::new(&self.tagsymbols)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.name, "default");
        assert_eq!(config.timeformat, "%Y-%m-%d %H:%M");
        assert_eq!(config.tagsymbols, "#@");
        assert!(config.journal_config().is_ok());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");
        fs::write(&path, "name = \"work\"\ntagsymbols = \"+\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.name, "work");
        assert_eq!(config.tagsymbols, "+");
        assert_eq!(config.timeformat, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.toml");
        fs::write(&path, "colour = true\n").unwrap();

        match Config::load(&path).unwrap_err() {
            ExportError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let result = Config::load(&temp.path().join("nope.toml"));
        match result.unwrap_err() {
            ExportError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_discover_next_to_journal_file() {
        let temp = TempDir::new().unwrap();
        let journal = temp.path().join("diary.txt");
        fs::write(&journal, "").unwrap();
        fs::write(temp.path().join("diary.toml"), "name = \"diary\"\n").unwrap();

        assert_eq!(Config::discover(&journal).unwrap().name, "diary");
    }

    #[test]
    fn test_discover_inside_folder_journal() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("config.toml"), "name = \"folder\"\n").unwrap();

        assert_eq!(Config::discover(temp.path()).unwrap().name, "folder");
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let journal = temp.path().join("diary.txt");
        fs::write(&journal, "").unwrap();

        assert_eq!(Config::discover(&journal).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = Config {
            timeformat: "%Q".to_string(),
            ..Config::default()
        };
        assert!(config.journal_config().is_err());

        let config = Config {
            tagsymbols: String::new(),
            ..Config::default()
        };
        assert!(config.journal_config().is_err());
    }
}
