use super::DevEnvironment;
use anyhow::{Context, Result};
use std::path::Path;

use crate::output::success;
use crate::paths::{self, REQUIREMENTS, REQUIREMENTS_DEV, VENV_DIR};
use crate::process::{CommandRunner, ExternalCommand};

/// Python virtual environment in `<project>/.venv`
#[derive(Debug, Clone)]
pub struct VenvEnvironment {
    python: String,
}

impl VenvEnvironment {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The three steps, in order: create, upgrade pip, install manifests
    pub fn commands(&self, project_path: &Path) -> Vec<ExternalCommand> {
        // pip is addressed by absolute path
        let pip = project_path.join(paths::venv_pip()).display().to_string();

        vec![
            ExternalCommand::new(&self.python)
                .args(["-m", "venv", VENV_DIR])
                .current_dir(project_path),
            ExternalCommand::new(&pip)
                .args(["install", "--upgrade", "pip"])
                .current_dir(project_path),
            ExternalCommand::new(&pip)
                .args(["install", "-r", REQUIREMENTS, "-r", REQUIREMENTS_DEV])
                .current_dir(project_path),
        ]
    }
}

impl Default for VenvEnvironment {
    fn default() -> Self {
        Self::new("python3")
    }
}

impl DevEnvironment for VenvEnvironment {
    fn name(&self) -> &'static str {
        "venv"
    }

    fn provision(&self, project_path: &Path, runner: &dyn CommandRunner) -> Result<()> {
        for cmd in self.commands(project_path) {
            runner
                .run(&cmd)?
                .check(&cmd)
                .context("Failed to set up the virtual environment")?;
        }

        success(format!("Installed dependencies into {}", VENV_DIR));
        Ok(())
    }
}
