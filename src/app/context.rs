use std::path::{Path, PathBuf};

use crate::domain::TerminalEmulator;
use crate::ports::TerminalLauncher;

/// Application context holding dependencies for command execution.
pub struct AppContext<L: TerminalLauncher> {
    launcher: L,
    terminal: TerminalEmulator,
    work_dir: PathBuf,
}

impl<L: TerminalLauncher> AppContext<L> {
    /// Create a new application context.
    ///
    /// Script paths are resolved against `work_dir`.
    pub fn new(launcher: L, terminal: TerminalEmulator, work_dir: PathBuf) -> Self {
        Self { launcher, terminal, work_dir }
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn terminal(&self) -> &TerminalEmulator {
        &self.terminal
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}
