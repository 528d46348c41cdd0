//! Scaffold writer
//!
//! Creates the directory tree and writes the template catalog into it.
//! Existing files are only replaced after the user confirms; a declined
//! overwrite skips that file and the run goes on.

pub mod templates;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::{log_debug, success};
use crate::paths;
use crate::prompt::{confirm, Input};

pub use templates::{FileTemplate, BASE_DEPENDENCIES, DEV_DEPENDENCIES};

/// What happened to a single template file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
}

/// Result of scaffolding a project
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub dirs: Vec<PathBuf>,
    pub files: Vec<(PathBuf, WriteOutcome)>,
}

impl ScaffoldReport {
    /// Files whose content now matches the template
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|(_, o)| *o != WriteOutcome::Skipped)
            .map(|(p, _)| p.as_path())
    }

    /// Files left untouched because overwrite was declined
    pub fn skipped(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|(_, o)| *o == WriteOutcome::Skipped)
            .map(|(p, _)| p.as_path())
    }
}

/// Create directories and write every template under `base_path`
pub fn create_project_structure(
    base_path: &Path,
    name: &str,
    include_web: bool,
    input: &mut dyn Input,
) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for dir in paths::project_dirs(include_web) {
        let path = base_path.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
        report.dirs.push(path);
    }
    log_debug("scaffold", format!("created {} directories", report.dirs.len()));

    for template in templates::catalog(name, include_web) {
        let path = base_path.join(template.path);
        let outcome = write_file_safely(&path, &template.content, input)?;
        report.files.push((path, outcome));
    }

    Ok(report)
}

/// Write `content` to `path`, asking before replacing an existing file
pub fn write_file_safely(path: &Path, content: &str, input: &mut dyn Input) -> Result<WriteOutcome> {
    let existed = path.exists();

    if existed {
        let question = format!("File '{}' exists. Overwrite?", path.display());
        if !confirm(input, &question, false)? {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!("Skipping '{}'", file_name);
            return Ok(WriteOutcome::Skipped);
        }
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    success(format!("Created: {}", path.display()));

    Ok(if existed {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    })
}
