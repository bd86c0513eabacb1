use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, catalogues are up to date
/// - `Failure` (1): `sync --check` found catalogues that would change
/// - `Error` (2): Command failed (malformed template or catalogue, I/O, config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Some catalogue is out of date.
    Failure,
    /// Command failed; nothing was written.
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
