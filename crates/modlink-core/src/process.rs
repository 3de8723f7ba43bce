//! Subprocess execution
//!
//! External tools run with the parent's stdin, stdout and stderr inherited so
//! Composer and Magento progress output streams live to the terminal. Only the
//! exit status comes back.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A command line to execute, optionally in a specific directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished child process exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    /// `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExitReport {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Success means an exit code of exactly zero.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Executes external commands.
///
/// `Err` means the program could not be launched at all; a program that ran
/// and failed is an `Ok` report with a non-zero code.
pub trait ProcessRunner {
    fn run(&self, command: &CommandSpec) -> std::io::Result<ExitReport>;
}

/// Runs commands as real child processes, blocking until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandSpec) -> std::io::Result<ExitReport> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &command.working_dir {
            cmd.current_dir(dir);
        }

        tracing::info!(command = %command, cwd = ?command.working_dir, "Running");

        let status = cmd.status()?;
        Ok(ExitReport {
            code: status.code(),
        })
    }
}
