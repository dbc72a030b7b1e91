//! termseq: Launch local shell setup scripts in terminal windows, in order.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::io;

use adapters::TerminalCommandAdapter;
use app::{AppContext, commands::launch};
use domain::{LaunchPlan, TerminalEmulator};

pub use app::commands::launch::{LaunchOutcome, LaunchReport};
pub use domain::{AppError, Completion, ScriptTask};

/// Run the shell setup sequence from the current directory.
///
/// Launches `ohmyzsh.sh` and waits for its terminal to close, then launches
/// `p10k.sh` without waiting. Missing scripts are reported and skipped.
pub fn setup() -> Result<LaunchReport, AppError> {
    let work_dir = std::env::current_dir()?;
    let ctx = AppContext::new(TerminalCommandAdapter::new(), TerminalEmulator::xfce4(), work_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    launch::execute(&ctx, &LaunchPlan::default_setup(), &mut out)
}
