use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): the file was processed
/// - `Failure` (1): `--check` found Japanese text
/// - `Error` (2): the run failed (missing anchor, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The file was processed.
    Success,
    /// `--check` found Japanese text.
    Failure,
    /// The run failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
