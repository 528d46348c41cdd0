//! Installing `gh` through the platform package manager

use crate::output::{failure, success};
use crate::platform::{Os, PackageManager, Platform};
use crate::process::{CommandRunner, ExternalCommand};

use super::cli;

/// (OS, package manager) -> commands that install `gh`, run in order
const GH_INSTALLERS: &[(Os, PackageManager, &[&[&str]])] = &[
    (Os::MacOs, PackageManager::Homebrew, &[&["brew", "install", "gh"]]),
    (
        Os::Linux,
        PackageManager::Apt,
        &[&["sudo", "apt", "update"], &["sudo", "apt", "install", "-y", "gh"]],
    ),
    (Os::Linux, PackageManager::Dnf, &[&["sudo", "dnf", "install", "-y", "gh"]]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    Run {
        manager: PackageManager,
        commands: Vec<ExternalCommand>,
    },
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed,
    /// No installer for this platform
    Unsupported(String),
    /// An install command failed, or `gh` is still missing afterwards
    Failed,
}

/// Look up how to install `gh` on `platform`
pub fn install_plan(platform: &Platform) -> InstallPlan {
    let entry = platform.package_manager.and_then(|pm| {
        GH_INSTALLERS
            .iter()
            .find(|(os, manager, _)| *os == platform.os && *manager == pm)
    });

    match entry {
        Some((_, manager, steps)) => InstallPlan::Run {
            manager: *manager,
            commands: steps
                .iter()
                .map(|argv| ExternalCommand::new(argv[0]).args(argv[1..].iter().copied()))
                .collect(),
        },
        None => InstallPlan::Unsupported(match platform.os {
            Os::MacOs => "Homebrew is not installed. Cannot install GitHub CLI.".to_string(),
            Os::Linux => "Unsupported Linux package manager.".to_string(),
            os => format!("GitHub CLI installation not supported on {}.", os),
        }),
    }
}

/// Run the install plan, then check that `gh` is now on `PATH`
pub fn install_gh(runner: &dyn CommandRunner, platform: &Platform) -> InstallOutcome {
    let (manager, commands) = match install_plan(platform) {
        InstallPlan::Run { manager, commands } => (manager, commands),
        InstallPlan::Unsupported(reason) => {
            failure(&reason);
            return InstallOutcome::Unsupported(reason);
        }
    };

    println!("📦 Installing GitHub CLI via {}...", manager);
    for cmd in &commands {
        match runner.run(cmd) {
            Ok(output) if output.success() => {}
            Ok(output) => {
                failure(format!(
                    "`{}` failed with exit code {}",
                    cmd,
                    output.code.map_or("?".to_string(), |c| c.to_string())
                ));
                return InstallOutcome::Failed;
            }
            Err(e) => {
                failure(format!("{:#}", e));
                return InstallOutcome::Failed;
            }
        }
    }

    if cli::is_installed(runner) {
        success("GitHub CLI installed");
        InstallOutcome::Installed
    } else {
        failure("GitHub CLI still not found on PATH after installation.");
        InstallOutcome::Failed
    }
}
