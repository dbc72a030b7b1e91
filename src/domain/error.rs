use std::io;

use thiserror::Error;

/// Library-wide error type for termseq operations.
///
/// A missing script is not an error; it is reported as a
/// [`LaunchOutcome::Missing`](crate::app::commands::launch::LaunchOutcome) and skipped.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Terminal emulator could not be started.
    #[error("Failed to launch terminal '{program}': {details}")]
    TerminalLaunch { program: String, details: String },

    /// Waiting on a spawned terminal failed.
    #[error("Failed to wait for terminal '{program}': {details}")]
    TerminalWait { program: String, details: String },
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::TerminalLaunch { .. } | AppError::TerminalWait { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
