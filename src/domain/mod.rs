pub mod error;
pub mod script_task;
pub mod terminal;

pub use error::AppError;
pub use script_task::{Completion, LaunchPlan, OHMYZSH_SCRIPT, P10K_SCRIPT, ScriptTask};
pub use terminal::{SCRIPT_SHELL, TerminalCommand, TerminalEmulator};
