//! Single source of truth for the generated project's filesystem layout.
//!
//! This module defines WHERE things land. It does no writing; the only I/O is
//! canonicalizing a target that already exists.
//!
//! ```text
//! <target>/
//! ├── cli/main.py
//! ├── src/  tests/  db/  scripts/
//! ├── webapp/app.py                  # web only
//! ├── webapp/templates/index.html    # web only
//! ├── .venv/                         # created by the provisioner
//! ├── README.md  LICENSE  .gitignore
//! ├── requirements.txt  requirements-dev.txt
//! └── pyproject.toml
//! ```

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Directories every project gets
pub const BASE_DIRS: &[&str] = &["cli", "src", "tests", "db", "scripts"];

/// Extra directories for the web frontend
pub const WEB_DIRS: &[&str] = &["webapp", "webapp/templates"];

/// Virtual environment directory, relative to the project root
pub const VENV_DIR: &str = ".venv";

pub const REQUIREMENTS: &str = "requirements.txt";
pub const REQUIREMENTS_DEV: &str = "requirements-dev.txt";

/// Directories to create, in creation order
pub fn project_dirs(include_web: bool) -> Vec<&'static str> {
    let mut dirs = BASE_DIRS.to_vec();
    if include_web {
        dirs.extend_from_slice(WEB_DIRS);
    }
    dirs
}

/// pip inside the project's virtual environment, relative to the project root
pub fn venv_pip() -> PathBuf {
    if cfg!(windows) {
        Path::new(VENV_DIR).join("Scripts").join("pip.exe")
    } else {
        Path::new(VENV_DIR).join("bin").join("pip")
    }
}

/// Resolve a user-supplied path against the current directory
pub fn resolve_target(raw: &str) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    resolve_target_from(raw, &cwd)
}

/// Expand `~`, make absolute against `cwd`, and normalize.
///
/// Existing paths are canonicalized. For a missing path the longest existing
/// prefix is canonicalized and the rest appended, so a `..` after a symlinked
/// directory climbs out of the link target, not out of the link.
pub fn resolve_target_from(raw: &str, cwd: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::tilde(raw);
    let path = PathBuf::from(expanded.as_ref());

    let absolute = if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    };

    if absolute.exists() {
        absolute
            .canonicalize()
            .with_context(|| format!("Failed to resolve path: {}", absolute.display()))
    } else {
        resolve_missing(&absolute)
    }
}

/// Project name: the last path component, lossily decoded
pub fn project_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string())
}

fn resolve_missing(path: &Path) -> Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(name) => {
                out.push(name);
                if out.exists() {
                    out = out
                        .canonicalize()
                        .with_context(|| format!("Failed to resolve path: {}", out.display()))?;
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}
