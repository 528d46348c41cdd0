//! External command invocation
//!
//! Every tool newproj drives (python, pip, git, gh, package managers) is run
//! through a [`CommandRunner`]. Commands are argument lists, never shell
//! strings. Whether a non-zero exit is fatal is decided by the caller:
//! [`CommandOutput::check`] for fatal steps, [`CommandOutput::success`] for
//! recoverable ones.

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::output::log_debug;

/// A program invocation: argv plus working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    quiet: bool,
}

impl ExternalCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            quiet: false,
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
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Discard stdout and stderr instead of inheriting them
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into an error naming the command
    pub fn check(self, cmd: &ExternalCommand) -> Result<()> {
        match self.code {
            Some(0) => Ok(()),
            Some(code) => anyhow::bail!("Command `{}` failed with exit code {}", cmd, code),
            None => anyhow::bail!("Command `{}` was terminated by a signal", cmd),
        }
    }
}

/// Runs external commands and locates programs on `PATH`
pub trait CommandRunner {
    /// Run to completion. An error means the command could not be started.
    fn run(&self, cmd: &ExternalCommand) -> Result<CommandOutput>;

    /// Resolve a program on `PATH`
    fn locate(&self, program: &str) -> Option<PathBuf>;

    fn is_available(&self, program: &str) -> bool {
        self.locate(program).is_some()
    }
}

/// Spawns real processes, blocking until they exit
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &ExternalCommand) -> Result<CommandOutput> {
        log_debug("process", format!("running `{}`", cmd));

        let mut command = Command::new(cmd.program());
        command.args(cmd.get_args());

        if let Some(dir) = cmd.get_current_dir() {
            command.current_dir(dir);
        }

        if cmd.is_quiet() {
            command.stdout(Stdio::null());
            command.stderr(Stdio::null());
        }

        let status = command
            .status()
            .with_context(|| format!("Failed to run command: {}", cmd))?;

        log_debug("process", format!("`{}` exited with {:?}", cmd, status.code()));
        Ok(CommandOutput {
            code: status.code(),
        })
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}
