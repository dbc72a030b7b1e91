use std::fmt;
use std::path::{Path, PathBuf};

use super::ScriptTask;

/// Shell used to interpret each script inside the terminal.
pub const SCRIPT_SHELL: &str = "bash";

/// Terminal emulator invocation shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalEmulator {
    program: String,
    hold_flag: String,
    exec_flag: String,
}

impl TerminalEmulator {
    pub fn new(
        program: impl Into<String>,
        hold_flag: impl Into<String>,
        exec_flag: impl Into<String>,
    ) -> Self {
        Self { program: program.into(), hold_flag: hold_flag.into(), exec_flag: exec_flag.into() }
    }

    /// `xfce4-terminal`, kept open after the inner command finishes.
    pub fn xfce4() -> Self {
        Self::new("xfce4-terminal", "--hold", "-e")
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Build the command that opens a window running `bash <path>`.
    pub fn command_for(&self, task: &ScriptTask) -> TerminalCommand {
        let inner = format!("{} {}", SCRIPT_SHELL, task.path().display());
        TerminalCommand {
            program: self.program.clone(),
            args: vec![self.hold_flag.clone(), self.exec_flag.clone(), inner],
            working_dir: None,
        }
    }
}

impl Default for TerminalEmulator {
    fn default() -> Self {
        Self::xfce4()
    }
}

/// Fully resolved process invocation for one script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Directory the terminal starts in; inherits the caller's when unset.
    pub working_dir: Option<PathBuf>,
}

impl TerminalCommand {
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for TerminalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " \"{}\"", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
