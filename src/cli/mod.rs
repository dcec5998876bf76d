//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit codes
//! - `report`: terminal output of a run
//! - `run`: config loading and pipeline setup

use anyhow::Result;

mod args;
mod exit_status;
pub mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::pipeline_config;

use report::ReportMode;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let summary = run::run(&args)?;

    let mode = if args.check {
        ReportMode::Check
    } else if args.dry_run {
        ReportMode::DryRun
    } else {
        ReportMode::Apply
    };
    report::print(&summary, mode, args.verbose);

    if args.check && !summary.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
