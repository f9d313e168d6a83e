use std::process::ExitCode;

/// Process exit status.
///
/// - `Success` (0): catalog written, or config created
/// - `Failure` (1): the command refused to act (e.g. config already exists)
/// - `Error` (2): fatal error (bad config, missing root, unwritable output)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
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
