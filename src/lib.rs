pub mod config;
pub mod dev_env;
pub mod git;
pub mod github;
pub mod output;
pub mod paths;
pub mod platform;
pub mod process;
pub mod project;
pub mod prompt;
pub mod scaffold;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::Config;
pub use project::{Pipeline, ProjectSpec, RunOutcome};
