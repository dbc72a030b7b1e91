pub mod terminal_command;

pub use terminal_command::TerminalCommandAdapter;
