use std::path::{Path, PathBuf};

/// Script installing oh-my-zsh. Runs first and is waited on.
pub const OHMYZSH_SCRIPT: &str = "ohmyzsh.sh";

/// Script configuring powerlevel10k. Runs last and is left running.
pub const P10K_SCRIPT: &str = "p10k.sh";

/// Whether the launcher blocks on a spawned terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Block until the terminal process exits.
    Wait,
    /// Start the terminal and move on without observing its exit.
    Detach,
}

impl Completion {
    pub fn from_wait_flag(wait: bool) -> Self {
        if wait { Completion::Wait } else { Completion::Detach }
    }
}

/// One script to launch in its own terminal window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTask {
    path: PathBuf,
    completion: Completion,
}

impl ScriptTask {
    pub fn new(path: impl Into<PathBuf>, completion: Completion) -> Self {
        Self { path: path.into(), completion }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn wait_for_completion(&self) -> bool {
        self.completion == Completion::Wait
    }
}

/// Ordered list of scripts, consumed once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    tasks: Vec<ScriptTask>,
}

impl LaunchPlan {
    pub fn new(tasks: Vec<ScriptTask>) -> Self {
        Self { tasks }
    }

    /// The shell setup sequence: oh-my-zsh to completion, then powerlevel10k detached.
    pub fn default_setup() -> Self {
        Self::new(vec![
            ScriptTask::new(OHMYZSH_SCRIPT, Completion::from_wait_flag(true)),
            ScriptTask::new(P10K_SCRIPT, Completion::from_wait_flag(false)),
        ])
    }

    pub fn tasks(&self) -> &[ScriptTask] {
        &self.tasks
    }
}
