//! Version control setup for a freshly scaffolded project
//!
//! Handles:
//! - Repository initialization
//! - Staging everything the scaffold wrote
//! - The initial commit, which is allowed to fail

mod operations;

pub use operations::{add_all, commit, init};

use anyhow::Result;
use std::path::Path;

use crate::output::{success, warn};
use crate::process::CommandRunner;

/// Message of the first commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial project scaffold";

/// How the initial commit went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// git refused, usually because there was nothing new to commit
    Failed,
}

/// Init, stage everything, and attempt the initial commit.
///
/// Init and staging failures are errors. A commit failure is reported as a
/// warning and returned as [`CommitOutcome::Failed`].
pub fn init_repository(runner: &dyn CommandRunner, repo: &Path) -> Result<CommitOutcome> {
    init(runner, repo)?;
    add_all(runner, repo)?;

    if commit(runner, repo, INITIAL_COMMIT_MESSAGE)?.success() {
        success("Created initial commit");
        Ok(CommitOutcome::Committed)
    } else {
        warn("Git commit failed, possibly because there's nothing new to commit.");
        Ok(CommitOutcome::Failed)
    }
}
