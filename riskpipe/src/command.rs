//! Shell-backed command runner

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use riskpipe_core::CommandRunner;
use tracing::{debug, error, warn};

use crate::{Error, Result};

/// Runs commands through a shell (`sh -c` by default) and waits for them
///
/// Failures are logged, never raised: callers of [`CommandRunner::run`]
/// only hand over the command line. Use [`execute`](Self::execute) when
/// the exit status matters.
#[derive(Debug, Clone)]
pub struct ShellCommandRunner {
    shell: PathBuf,
    working_dir: Option<PathBuf>,
}

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another POSIX-compatible shell
    pub fn with_shell<P: AsRef<Path>>(mut self, shell: P) -> Self {
        self.shell = shell.as_ref().to_path_buf();
        self
    }

    /// Run commands from `dir` instead of the current directory
    pub fn with_working_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Run `command` and return its exit status
    pub fn execute(&self, command: &str) -> Result<ExitStatus> {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        cmd.status().map_err(Error::io(&self.shell))
    }
}

impl Default for ShellCommandRunner {
    fn default() -> Self {
        Self {
            shell: PathBuf::from("sh"),
            working_dir: None,
        }
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str) {
        match self.execute(command) {
            Ok(status) if status.success() => debug!(command, "command finished"),
            Ok(status) => warn!(command, code = ?status.code(), "command failed"),
            Err(err) => error!(command, %err, "command could not be started"),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_execute_reports_exit_code() {
        let runner = ShellCommandRunner::new();

        assert!(runner.execute("true").unwrap().success());
        assert_eq!(runner.execute("exit 3").unwrap().code(), Some(3));
    }

    #[test]
    fn test_run_has_side_effects_in_working_dir() {
        let dir = tempdir().unwrap();
        let runner = ShellCommandRunner::new().with_working_dir(dir.path());

        runner.run("echo converted > out.txt");

        let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert_eq!(written.trim(), "converted");
    }

    #[test]
    fn test_run_swallows_failures() {
        ShellCommandRunner::new().run("exit 1");
        ShellCommandRunner::new()
            .with_shell("/nonexistent/shell")
            .run("true");
    }

    #[test]
    fn test_missing_shell_is_an_io_error() {
        let runner = ShellCommandRunner::new().with_shell("/nonexistent/shell");

        assert!(matches!(runner.execute("true"), Err(Error::Io { .. })));
    }

    #[test]
    fn test_usable_through_the_trait() {
        fn convert(runner: &dyn CommandRunner) {
            runner.run("true");
        }
        convert(&ShellCommandRunner::new());
    }
}
