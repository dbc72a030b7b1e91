mod terminal_launcher;

pub use terminal_launcher::TerminalLauncher;
