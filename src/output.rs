//! Status lines and debug logging
//!
//! Progress goes to stdout with the usual markers. Debug lines go to stderr
//! and only when `NEWPROJ_LOG` is set.

use colored::Colorize;
use std::fmt::Display;

use crate::config::LOG_ENV_VAR;

/// Debug logging, enabled by `NEWPROJ_LOG`
pub fn log_debug(scope: &str, msg: impl Display) {
    if std::env::var(LOG_ENV_VAR).is_ok() {
        eprintln!("[DEBUG {}] {}", scope, msg);
    }
}

/// Section header for a pipeline stage
pub fn stage(icon: &str, title: &str) {
    println!("\n{} {}", icon, title.bold());
}

pub fn success(msg: impl Display) {
    println!("{} {}", "✓".green().bold(), msg);
}

pub fn warn(msg: impl Display) {
    println!("{} {}", "⚠️".yellow(), msg);
}

pub fn failure(msg: impl Display) {
    println!("{} {}", "❌".red(), msg);
}
