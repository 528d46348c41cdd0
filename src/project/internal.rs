//! Internal implementation for the scaffolding pipeline

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use super::{Pipeline, ProjectSpec, RunOutcome, RunReport};
use crate::dev_env::{DevEnvironment, VenvEnvironment};
use crate::git;
use crate::github::GitHubIntegrator;
use crate::output::{log_debug, stage, success};
use crate::paths;
use crate::prompt::{confirm, Input};
use crate::scaffold;

pub(super) fn run(pipeline: &Pipeline<'_>, target: &str, input: &mut dyn Input) -> Result<RunOutcome> {
    // === STEP 1: TARGET ===
    let Some(path) = ensure_target(target, input)? else {
        println!("Aborting.");
        return Ok(RunOutcome::Aborted);
    };
    let name = paths::project_name(&path);

    // === STEP 2: OPTIONS ===
    let include_web = confirm(input, "Include web frontend?", false)?;

    let spec = ProjectSpec {
        path,
        name,
        include_web,
    };
    log_debug("project", format!("{:?}", spec));

    // === STEP 3: SCAFFOLD ===
    stage("📁", &format!("Scaffolding {}", spec.name));
    let scaffold =
        scaffold::create_project_structure(&spec.path, &spec.name, spec.include_web, input)?;

    // === STEP 4: VIRTUAL ENVIRONMENT ===
    let dev_env = VenvEnvironment::new(&pipeline.config.python);
    stage("🐍", &format!("Provisioning {}", dev_env.name()));
    dev_env.provision(&spec.path, pipeline.runner)?;

    // === STEP 5: GIT ===
    stage("📝", "Initializing git repository");
    let commit = git::init_repository(pipeline.runner, &spec.path)?;

    // === STEP 6: GITHUB ===
    stage("🐙", "GitHub");
    let remote = GitHubIntegrator::new(pipeline.runner)
        .with_os(pipeline.os)
        .publish(&spec.name, &spec.path, input)?;

    println!();
    success(format!(
        "Project '{}' created at {}",
        spec.name.bold(),
        spec.path.display()
    ));

    Ok(RunOutcome::Completed(RunReport {
        spec,
        scaffold,
        commit,
        remote,
    }))
}

/// Resolve `target`, creating it after confirmation.
///
/// `None` means the directory is missing and the user declined to create it.
fn ensure_target(target: &str, input: &mut dyn Input) -> Result<Option<PathBuf>> {
    let path = paths::resolve_target(target)?;

    if !path.exists() {
        let question = format!("Directory '{}' does not exist. Create it?", path.display());
        if !confirm(input, &question, false)? {
            return Ok(None);
        }
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        success(format!("Created {}", path.display()));
    }

    Ok(Some(path))
}
