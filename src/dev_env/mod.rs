pub mod venv;

use anyhow::Result;
use std::path::Path;

use crate::process::CommandRunner;

pub use venv::VenvEnvironment;

/// Trait for isolated dependency environments
pub trait DevEnvironment {
    /// Get the name of this development environment
    fn name(&self) -> &'static str;

    /// Create the environment inside `project_path` and install the
    /// declared dependencies into it.
    ///
    /// Any failing step is fatal: the error propagates and nothing after it
    /// runs.
    fn provision(&self, project_path: &Path, runner: &dyn CommandRunner) -> Result<()>;
}
