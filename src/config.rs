//! Runtime configuration for newproj
//!
//! There is no config file. Everything is read once from environment
//! variables at startup and stays immutable for the run.

use std::env;

/// Answer every prompt with its default
pub const NONINTERACTIVE_ENV_VAR: &str = "NEWPROJ_NONINTERACTIVE";

/// Interpreter used to create the virtual environment
pub const PYTHON_ENV_VAR: &str = "NEWPROJ_PYTHON";

/// Enable `[DEBUG ...]` lines on stderr. Checked at each log call.
pub const LOG_ENV_VAR: &str = "NEWPROJ_LOG";

/// Force plain output
pub const NO_COLOR_ENV_VAR: &str = "NEWPROJ_NO_COLOR";

const DEFAULT_PYTHON: &str = "python3";

/// Configuration for newproj
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skip stdin and take the default answer for every prompt
    pub non_interactive: bool,
    /// Python interpreter for `-m venv`
    pub python: String,
    /// Colored output enabled
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            non_interactive: false,
            python: DEFAULT_PYTHON.to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let python = lookup(PYTHON_ENV_VAR)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PYTHON.to_string());

        Self {
            non_interactive: lookup(NONINTERACTIVE_ENV_VAR).is_some(),
            python,
            color: lookup(NO_COLOR_ENV_VAR).is_none(),
        }
    }
}
