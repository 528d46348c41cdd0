//! Scaffold a new project
//!
//! Wires the real terminal, the system process runner and the environment
//! configuration into [`newproj::Pipeline`].
//!
//! # Example
//!
//! ```text
//! newproj ./demo
//! NEWPROJ_NONINTERACTIVE=1 newproj ~/code/existing-dir
//! ```

use anyhow::Result;

use newproj::process::SystemRunner;
use newproj::prompt::{DefaultsInput, Input, StdinInput};
use newproj::{Config, Pipeline};

/// Execute the scaffolding run for `path`
///
/// An aborted run (target missing, creation declined) still returns `Ok`.
/// Fatal stage failures come back as errors and end the process non-zero.
pub fn execute(path: &str) -> Result<()> {
    let config = Config::from_env();
    if !config.color {
        colored::control::set_override(false);
    }

    let runner = SystemRunner;
    let mut stdin = StdinInput;
    let mut defaults = DefaultsInput;
    let input: &mut dyn Input = if config.non_interactive {
        &mut defaults
    } else {
        &mut stdin
    };

    Pipeline::new(&config, &runner).run(path, input)?;
    Ok(())
}
