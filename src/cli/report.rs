//! Report formatting and printing utilities.
//!
//! Separate from core logic to allow romakey to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// How the run was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    Apply,
    DryRun,
    Check,
}

/// Print the outcome of a run to stdout.
pub fn print(summary: &RunSummary, mode: ReportMode, verbose: bool) {
    print_to(summary, mode, verbose, &mut io::stdout().lock());
}

/// Print the outcome of a run to a custom writer.
pub fn print_to<W: Write>(summary: &RunSummary, mode: ReportMode, verbose: bool, writer: &mut W) {
    let source = summary.source.display();

    if summary.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No Japanese text found in {}", source).green()
        );
        return;
    }

    print_table(summary, mode != ReportMode::Apply || verbose, verbose, writer);

    let count = summary.extractions.len();
    let keys = summary.bundle.len();
    match mode {
        ReportMode::Apply => {
            let _ = writeln!(
                writer,
                "{} {} {} in {} ({} {} under {})",
                SUCCESS_MARK.green(),
                "Replaced".green().bold(),
                plural(summary.replaced, "occurrence"),
                source,
                keys,
                if keys == 1 { "key" } else { "keys" },
                summary.namespace.cyan()
            );
            let _ = writeln!(writer, "  wrote {}", summary.side_car.path.display());
        }
        ReportMode::DryRun => {
            let _ = writeln!(
                writer,
                "{} {} in {} ({} {} under {})",
                "Would replace".yellow().bold(),
                plural(summary.replaced, "occurrence"),
                source,
                keys,
                if keys == 1 { "key" } else { "keys" },
                summary.namespace.cyan()
            );
            let _ = writeln!(
                writer,
                "  would write {}",
                summary.side_car.path.display()
            );
            let _ = writeln!(writer, "Run without {} to apply.", "--dry-run".cyan());
        }
        ReportMode::Check => {
            let _ = writeln!(
                writer,
                "{} {}",
                FAILURE_MARK.red(),
                format!("Found {} in {}", plural(count, "Japanese string"), source).red()
            );
        }
    }
}

fn print_table<W: Write>(summary: &RunSummary, show: bool, verbose: bool, writer: &mut W) {
    if !show {
        return;
    }

    let key_width = summary
        .extractions
        .iter()
        .map(|e| summary.namespace.len() + 1 + e.key.len())
        .max()
        .unwrap_or(0);
    let text_width = summary
        .extractions
        .iter()
        .map(|e| e.text.width())
        .max()
        .unwrap_or(0);

    for extraction in &summary.extractions {
        let qualified = format!("{}.{}", summary.namespace, extraction.key);
        let _ = write!(
            writer,
            "  {}{}  {}",
            qualified.cyan(),
            " ".repeat(key_width - qualified.len()),
            extraction.text
        );
        if verbose {
            let padding = text_width - extraction.text.width();
            let _ = write!(
                writer,
                "{}  {}",
                " ".repeat(padding),
                format!("({})", extraction.context).dimmed()
            );
        }
        let _ = writeln!(writer);
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
