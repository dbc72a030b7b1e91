//! Shared testing harness for `termseq` integration tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

/// Stand-in for `xfce4-terminal` that records its arguments instead of opening a window.
///
/// It detaches from the inherited stdout/stderr so a detached launch does not keep the
/// test's output pipe open. Scripts whose command line mentions `$FAKE_TERMINAL_SLOW`
/// sleep for `$FAKE_TERMINAL_DELAY` seconds before exiting.
const FAKE_TERMINAL: &str = r#"#!/bin/sh
exec >/dev/null 2>&1
echo "start $*" >> "$FAKE_TERMINAL_LOG"
case "$*" in
  *"$FAKE_TERMINAL_SLOW"*) sleep "$FAKE_TERMINAL_DELAY" ;;
esac
echo "end $*" >> "$FAKE_TERMINAL_LOG"
"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with a fake terminal on `PATH`.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");
        let terminal = bin_dir.join("xfce4-terminal");
        fs::write(&terminal, FAKE_TERMINAL).expect("Failed to write fake terminal");
        fs::set_permissions(&terminal, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake terminal executable");

        Self { root, work_dir, bin_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// File the fake terminal appends its invocations to.
    pub(crate) fn terminal_log(&self) -> PathBuf {
        self.root.path().join("terminal.log")
    }

    /// Create a script in the work directory.
    pub(crate) fn write_script(&self, name: &str) {
        fs::write(self.work_dir.join(name), "#!/bin/bash\necho setup\n")
            .expect("Failed to write script");
    }

    /// Build a command for invoking the compiled `termseq` binary with the fake terminal.
    pub(crate) fn cli(&self) -> Command {
        let path = match env::var_os("PATH") {
            Some(existing) => {
                let mut dirs = vec![self.bin_dir.clone()];
                dirs.extend(env::split_paths(&existing));
                env::join_paths(dirs).expect("Failed to build PATH")
            }
            None => self.bin_dir.clone().into_os_string(),
        };

        let mut cmd = self.cli_with_path(path);
        cmd.env("FAKE_TERMINAL_SLOW", "termseq-nothing-is-slow").env("FAKE_TERMINAL_DELAY", "0");
        cmd
    }

    /// Build a command whose `PATH` is exactly `path`.
    pub(crate) fn cli_with_path(&self, path: impl AsRef<std::ffi::OsStr>) -> Command {
        let mut cmd = Command::cargo_bin("termseq").expect("Failed to locate termseq binary");
        cmd.current_dir(&self.work_dir)
            .env("PATH", path)
            .env("FAKE_TERMINAL_LOG", self.terminal_log())
            .env_remove("RUST_LOG");
        cmd
    }

    /// Lines recorded by the fake terminal so far.
    pub(crate) fn terminal_events(&self) -> Vec<String> {
        fs::read_to_string(self.terminal_log())
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Poll the terminal log until `line` shows up, panicking after a generous timeout.
    pub(crate) fn wait_for_event(&self, line: &str) -> Vec<String> {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let events = self.terminal_events();
            if events.iter().any(|e| e == line) {
                return events;
            }
            assert!(Instant::now() < deadline, "timed out waiting for '{}', saw {:?}", line, events);
            thread::sleep(Duration::from_millis(50));
        }
    }
}
