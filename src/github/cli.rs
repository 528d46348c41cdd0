//! `gh` invocations

use std::path::Path;

use crate::process::{CommandRunner, ExternalCommand};
use crate::prompt::Visibility;

pub const GH: &str = "gh";

/// Is `gh` on `PATH`
pub fn is_installed(runner: &dyn CommandRunner) -> bool {
    runner.is_available(GH)
}

/// `gh auth status`, output suppressed. A command that cannot start counts
/// as unauthenticated.
pub fn is_authenticated(runner: &dyn CommandRunner) -> bool {
    let cmd = ExternalCommand::new(GH).args(["auth", "status"]).quiet();
    runner.run(&cmd).map(|o| o.success()).unwrap_or(false)
}

/// Interactive `gh auth login`
pub fn auth_login() -> ExternalCommand {
    ExternalCommand::new(GH).args(["auth", "login"])
}

/// Create `<name>` from the contents of `repo` and push it
pub fn repo_create(name: &str, visibility: Visibility, repo: &Path) -> ExternalCommand {
    ExternalCommand::new(GH)
        .args(["repo", "create", name, "--source=.", visibility.as_flag(), "--push"])
        .current_dir(repo)
}
