use std::process::{Child, Command};

use crate::domain::{AppError, TerminalCommand};
use crate::ports::TerminalLauncher;

#[derive(Debug, Clone, Default)]
pub struct TerminalCommandAdapter;

impl TerminalCommandAdapter {
    pub fn new() -> Self {
        Self
    }

    fn spawn(&self, command: &TerminalCommand) -> Result<Child, AppError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.working_dir {
            cmd.current_dir(dir);
        }

        let child = cmd.spawn().map_err(|e| AppError::TerminalLaunch {
            program: command.program.clone(),
            details: e.to_string(),
        })?;
        tracing::debug!(pid = child.id(), command = %command, "spawned terminal");
        Ok(child)
    }
}

impl TerminalLauncher for TerminalCommandAdapter {
    fn run_to_completion(&self, command: &TerminalCommand) -> Result<(), AppError> {
        let mut child = self.spawn(command)?;

        let status = child.wait().map_err(|e| AppError::TerminalWait {
            program: command.program.clone(),
            details: e.to_string(),
        })?;
        tracing::debug!(pid = child.id(), ?status, "terminal exited");
        Ok(())
    }

    fn spawn_detached(&self, command: &TerminalCommand) -> Result<(), AppError> {
        // Dropping a Child neither kills nor reaps it.
        let child = self.spawn(command)?;
        tracing::debug!(pid = child.id(), "terminal detached");
        Ok(())
    }
}
