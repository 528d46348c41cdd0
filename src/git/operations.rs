//! Low-level git operations

use anyhow::{Context, Result};
use std::path::Path;

use crate::process::{CommandOutput, CommandRunner, ExternalCommand};

fn git(repo: &Path) -> ExternalCommand {
    ExternalCommand::new("git").current_dir(repo)
}

/// Initialize a repository in `repo`
pub fn init(runner: &dyn CommandRunner, repo: &Path) -> Result<()> {
    let cmd = git(repo).arg("init");
    runner
        .run(&cmd)?
        .check(&cmd)
        .context("Failed to initialize git repository")
}

/// Stage every file in the working tree
pub fn add_all(runner: &dyn CommandRunner, repo: &Path) -> Result<()> {
    let cmd = git(repo).args(["add", "."]);
    runner
        .run(&cmd)?
        .check(&cmd)
        .context("Failed to stage files")
}

/// Commit staged changes.
///
/// Returns the raw exit so the caller decides what a failure means.
pub fn commit(runner: &dyn CommandRunner, repo: &Path, message: &str) -> Result<CommandOutput> {
    let cmd = git(repo).args(["commit", "-m", message]);
    runner.run(&cmd).context("Failed to run git commit")
}
