use crate::domain::{AppError, TerminalCommand};

/// Port for starting terminal windows.
pub trait TerminalLauncher {
    /// Spawn the terminal and block until its process exits.
    ///
    /// The exit status is not inspected.
    fn run_to_completion(&self, command: &TerminalCommand) -> Result<(), AppError>;

    /// Spawn the terminal and return immediately.
    ///
    /// The child is never waited on and may outlive the caller.
    fn spawn_detached(&self, command: &TerminalCommand) -> Result<(), AppError>;
}
