//! Project module - one scaffolding run from target path to remote push
//!
//! Stages run strictly in order:
//!
//! 1. Target resolution (may abort the run)
//! 2. Web frontend option
//! 3. Scaffold writer
//! 4. Virtual environment provisioning (fatal on failure)
//! 5. Git init/stage (fatal) and initial commit (warning on failure)
//! 6. GitHub remote (never fatal)
//!
//! # Example
//!
//! ```no_run
//! use newproj::config::Config;
//! use newproj::process::SystemRunner;
//! use newproj::project::{Pipeline, RunOutcome};
//! use newproj::prompt::StdinInput;
//!
//! let config = Config::from_env();
//! let runner = SystemRunner;
//! match Pipeline::new(&config, &runner).run("./demo", &mut StdinInput)? {
//!     RunOutcome::Completed(report) => println!("{}", report.spec.name),
//!     RunOutcome::Aborted => {}
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

mod internal;

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;
use crate::git::CommitOutcome;
use crate::github::RemoteOutcome;
use crate::platform::Os;
use crate::process::CommandRunner;
use crate::prompt::Input;
use crate::scaffold::ScaffoldReport;

/// What is being generated. Fixed once the target is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    /// Absolute target directory
    pub path: PathBuf,
    /// Last component of `path`
    pub name: String,
    pub include_web: bool,
}

/// Everything that happened in a completed run
#[derive(Debug)]
pub struct RunReport {
    pub spec: ProjectSpec,
    pub scaffold: ScaffoldReport,
    pub commit: CommitOutcome,
    pub remote: RemoteOutcome,
}

#[derive(Debug)]
pub enum RunOutcome {
    /// Target directory missing and creation declined; nothing was touched
    Aborted,
    Completed(RunReport),
}

/// Sequences the stages against a runner and an input source
pub struct Pipeline<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
    os: Os,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            runner,
            os: Os::current(),
        }
    }

    /// OS used to pick a GitHub CLI installer
    pub fn with_os(mut self, os: Os) -> Self {
        self.os = os;
        self
    }

    /// Scaffold the project at `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A directory or file cannot be written
    /// - Any virtual environment step exits non-zero
    /// - `git init` or `git add` exits non-zero
    /// - Reading an answer from the input fails
    pub fn run(&self, target: &str, input: &mut dyn Input) -> Result<RunOutcome> {
        internal::run(self, target, input)
    }
}
