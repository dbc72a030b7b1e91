use std::io::Write;
use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, Completion, LaunchPlan, ScriptTask};
use crate::ports::TerminalLauncher;

/// What happened to a single script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// Path was absent; nothing was spawned.
    Missing(PathBuf),
    /// Terminal ran and its process exited before we continued.
    Waited(PathBuf),
    /// Terminal was started and left running.
    Detached(PathBuf),
}

impl LaunchOutcome {
    pub fn spawned(&self) -> bool {
        !matches!(self, LaunchOutcome::Missing(_))
    }
}

/// Outcomes of a full plan, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchReport {
    pub outcomes: Vec<LaunchOutcome>,
}

impl LaunchReport {
    pub fn spawned(&self) -> usize {
        self.outcomes.iter().filter(|o| o.spawned()).count()
    }

    pub fn missing(&self) -> usize {
        self.outcomes.len() - self.spawned()
    }
}

/// Launch one script in a terminal window.
///
/// A missing script is reported on `out` and skipped. The "running" notice is
/// written before anything is spawned.
pub fn run<L, O>(
    ctx: &AppContext<L>,
    task: &ScriptTask,
    out: &mut O,
) -> Result<LaunchOutcome, AppError>
where
    L: TerminalLauncher,
    O: Write,
{
    let path = task.path();

    if !ctx.work_dir().join(path).exists() {
        writeln!(out, "Script not found: {}", path.display())?;
        tracing::debug!(script = %path.display(), "skipping missing script");
        return Ok(LaunchOutcome::Missing(path.to_path_buf()));
    }

    writeln!(out, "Running script: {}", path.display())?;
    out.flush()?;

    let command = ctx.terminal().command_for(task).in_dir(ctx.work_dir());
    tracing::debug!(command = %command, completion = ?task.completion(), "launching script");

    match task.completion() {
        Completion::Wait => {
            ctx.launcher().run_to_completion(&command)?;
            Ok(LaunchOutcome::Waited(path.to_path_buf()))
        }
        Completion::Detach => {
            ctx.launcher().spawn_detached(&command)?;
            Ok(LaunchOutcome::Detached(path.to_path_buf()))
        }
    }
}

/// Execute the launch command: every task in order, stopping at the first fatal error.
pub fn execute<L, O>(
    ctx: &AppContext<L>,
    plan: &LaunchPlan,
    out: &mut O,
) -> Result<LaunchReport, AppError>
where
    L: TerminalLauncher,
    O: Write,
{
    let mut report = LaunchReport::default();
    for task in plan.tasks() {
        report.outcomes.push(run(ctx, task, out)?);
    }
    Ok(report)
}
