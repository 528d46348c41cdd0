//! Remote repository creation through the GitHub CLI
//!
//! The integrator walks `gh` through three states:
//!
//! ```text
//! Absent ──install──▶ Present/Unauthenticated ──login──▶ Present/Authenticated
//!    │                        │                                  │
//!    └── declined/failed      └── declined/failed                ├── push declined
//!        (skip)                   (skip)                         └── create + push
//! ```
//!
//! Every way out is non-fatal. The only errors returned are failures to read
//! an answer from the user.

pub mod cli;
pub mod install;

use anyhow::Result;
use std::path::Path;

use crate::output::{failure, success, warn};
use crate::platform::{Os, Platform};
use crate::process::CommandRunner;
use crate::prompt::{ask_visibility, confirm, Input, Visibility};

pub use install::{install_gh, install_plan, InstallOutcome, InstallPlan};

/// Observed state of the GitHub CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhState {
    Absent,
    Unauthenticated,
    Authenticated,
}

/// Why the remote step did not push
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// `gh` missing and installation declined
    InstallDeclined,
    /// `gh` missing and installation unsupported or failed
    InstallFailed,
    LoginDeclined,
    LoginFailed,
    /// Login ran but `gh auth status` still fails
    StillUnauthenticated,
    PushDeclined,
}

/// Terminal state of the remote step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    Pushed(Visibility),
    Skipped(SkipReason),
    /// `gh repo create` exited non-zero
    CreateFailed,
}

/// Drives `gh` from detection to push
pub struct GitHubIntegrator<'a> {
    runner: &'a dyn CommandRunner,
    os: Os,
}

impl<'a> GitHubIntegrator<'a> {
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self {
            runner,
            os: Os::current(),
        }
    }

    /// Pretend to run on `os` when choosing an installer
    pub fn with_os(mut self, os: Os) -> Self {
        self.os = os;
        self
    }

    /// Check `PATH` and `gh auth status`
    pub fn detect_state(&self) -> GhState {
        if !cli::is_installed(self.runner) {
            GhState::Absent
        } else if cli::is_authenticated(self.runner) {
            GhState::Authenticated
        } else {
            GhState::Unauthenticated
        }
    }

    /// Create the remote repository `name` from `repo` and push it
    pub fn publish(&self, name: &str, repo: &Path, input: &mut dyn Input) -> Result<RemoteOutcome> {
        let mut state = self.detect_state();

        if state == GhState::Absent {
            if !confirm(input, "GitHub CLI not found. Install it now?", false)? {
                warn("Skipping GitHub push: GitHub CLI (`gh`) is not installed.");
                return Ok(RemoteOutcome::Skipped(SkipReason::InstallDeclined));
            }

            let platform = Platform::detect_for(self.os, self.runner);
            if install_gh(self.runner, &platform) != InstallOutcome::Installed {
                failure("Skipping GitHub push: GitHub CLI could not be installed.");
                return Ok(RemoteOutcome::Skipped(SkipReason::InstallFailed));
            }
            state = self.detect_state();
        }

        if state == GhState::Unauthenticated {
            warn("GitHub CLI is not authenticated.");
            if let Err(reason) = self.login(input)? {
                return Ok(RemoteOutcome::Skipped(reason));
            }
        }

        if !confirm(input, "Push to GitHub?", false)? {
            println!("Skipping GitHub push.");
            return Ok(RemoteOutcome::Skipped(SkipReason::PushDeclined));
        }

        let visibility = ask_visibility(input)?;
        Ok(self.create_and_push(name, visibility, repo))
    }

    /// Offer `gh auth login` and verify it took
    fn login(&self, input: &mut dyn Input) -> Result<std::result::Result<(), SkipReason>> {
        if !confirm(input, "Run `gh auth login` now?", false)? {
            failure("Skipping GitHub push due to lack of authentication.");
            return Ok(Err(SkipReason::LoginDeclined));
        }

        let login_ok = self
            .runner
            .run(&cli::auth_login())
            .map(|o| o.success())
            .unwrap_or(false);
        if !login_ok {
            failure("Authentication failed or was cancelled.");
            return Ok(Err(SkipReason::LoginFailed));
        }

        if !cli::is_authenticated(self.runner) {
            failure("Still not authenticated after `gh auth login`. Aborting GitHub push.");
            return Ok(Err(SkipReason::StillUnauthenticated));
        }

        success("Authenticated with GitHub");
        Ok(Ok(()))
    }

    fn create_and_push(&self, name: &str, visibility: Visibility, repo: &Path) -> RemoteOutcome {
        let cmd = cli::repo_create(name, visibility, repo);
        match self.runner.run(&cmd) {
            Ok(output) if output.success() => {
                success(format!("Created {} GitHub repository '{}' and pushed", visibility, name));
                RemoteOutcome::Pushed(visibility)
            }
            Ok(_) => {
                failure(format!("GitHub repository creation failed (`{}`).", cmd));
                RemoteOutcome::CreateFailed
            }
            Err(e) => {
                failure(format!("GitHub repository creation failed: {:#}", e));
                RemoteOutcome::CreateFailed
            }
        }
    }
}
