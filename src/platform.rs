//! Host platform detection: operating system and package manager

use std::env;
use std::fmt;

use crate::output::log_debug;
use crate::process::CommandRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    MacOs,
    Linux,
    Windows,
    Other,
}

impl Os {
    /// Map a `std::env::consts::OS` identifier
    pub fn from_id(id: &str) -> Self {
        match id {
            "macos" => Os::MacOs,
            "linux" => Os::Linux,
            "windows" => Os::Windows,
            _ => Os::Other,
        }
    }

    pub fn current() -> Self {
        Self::from_id(env::consts::OS)
    }

    /// Package managers worth probing on this OS, most preferred first
    pub fn package_manager_candidates(&self) -> &'static [PackageManager] {
        match self {
            Os::MacOs => &[PackageManager::Homebrew],
            Os::Linux => &[PackageManager::Apt, PackageManager::Dnf],
            Os::Windows | Os::Other => &[],
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Os::MacOs => "macOS",
            Os::Linux => "Linux",
            Os::Windows => "Windows",
            Os::Other => env::consts::OS,
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Homebrew,
    Apt,
    Dnf,
}

impl PackageManager {
    /// Executable looked up on `PATH`
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Homebrew => "brew",
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Homebrew => "Homebrew",
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
        };
        write!(f, "{}", name)
    }
}

/// Operating system plus the first available package manager for it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: Os,
    pub package_manager: Option<PackageManager>,
}

impl Platform {
    /// Search `PATH` for the package managers `os` supports
    pub fn detect_for(os: Os, runner: &dyn CommandRunner) -> Self {
        let package_manager = os
            .package_manager_candidates()
            .iter()
            .copied()
            .find(|pm| runner.is_available(pm.program()));

        log_debug(
            "platform",
            format!("os={} package_manager={:?}", os, package_manager),
        );

        Self {
            os,
            package_manager,
        }
    }
}
