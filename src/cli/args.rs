//! CLI argument definitions using clap.
//!
//! The tool works on one source file per invocation. The namespace comes from
//! `--trim` if given, else from `--key`, else from the configured default
//! convention.

use std::path::PathBuf;

use clap::Parser;

use crate::core::namespace::DefaultNamespace;
use crate::core::scan::ScanMode;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Replaces Japanese text in a source file with romaji translation keys",
    long_about = None
)]
pub struct Arguments {
    /// Path to an html, js or rb file
    pub source: PathBuf,

    /// Build the namespace from the path after this substring
    #[arg(short, long)]
    pub trim: Option<String>,

    /// Output directory relative to the working directory (defaults to the source file directory)
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Two letter language code used in the dictionary file name of html files
    #[arg(short, long, default_value = "ja")]
    pub lang: String,

    /// Suffix inserted before the dictionary file extension
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Explicit dotted namespace; the dictionary is nested under each segment
    #[arg(short, long, default_value = "")]
    pub key: String,

    /// Scan mode (defaults to tree for html files, line otherwise)
    #[arg(long, value_enum)]
    pub mode: Option<ScanMode>,

    /// Namespace convention when neither --trim nor --key is given (overrides config file)
    #[arg(long, value_enum)]
    pub namespace: Option<DefaultNamespace>,

    /// Application root segment for the anchor convention (overrides config file)
    #[arg(long)]
    pub anchor: Option<String>,

    /// Show the planned keys without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit with status 1 when Japanese text is found
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Whether files stay untouched.
    pub fn is_read_only(&self) -> bool {
        self.dry_run || self.check
    }
}
