//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "eleventy-export")]
#[command(about = "Export journal entries as Markdown pages with YAML front matter", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Journal file, or folder of .txt journal files
    #[arg(value_name = "JOURNAL")]
    pub journal: PathBuf,

    /// Directory to write one file per entry into
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, default_value = "11ty")]
    pub format: String,

    /// Journal config file (default: discovered next to the journal)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Journal name used in tags and permalinks
    #[arg(short, long)]
    pub name: Option<String>,

    /// Disable coloured diagnostics
    #[arg(long)]
    pub no_color: bool,
}
