//! User interaction
//!
//! All terminal reads go through [`Input`]. The decision functions on top of
//! it are plain string-to-value mappings, so each stage can be driven by
//! canned answers in tests.

use anyhow::{Context, Result};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Source of answers for interactive prompts
pub trait Input {
    /// Show `prompt` and return the raw answer line.
    ///
    /// End of input is an empty answer.
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Reads answers from stdin
#[derive(Debug, Default)]
pub struct StdinInput;

impl Input for StdinInput {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read answer from stdin")?;
        Ok(input)
    }
}

/// Answers every prompt with its default
#[derive(Debug, Default)]
pub struct DefaultsInput;

impl Input for DefaultsInput {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        println!("{prompt}(default)");
        Ok(String::new())
    }
}

/// Normalize a yes/no answer; anything unrecognised takes the default
pub fn parse_yes_no(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Ask a yes/no question (`(y/N)` or `(Y/n)` depending on `default`)
pub fn confirm(input: &mut dyn Input, question: &str, default: bool) -> Result<bool> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    let answer = input.ask(&format!("{question} {hint}: "))?;
    Ok(parse_yes_no(&answer, default))
}

/// Visibility of the remote repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    /// `public` or `private`, case-insensitive; everything else is private
    pub fn parse(answer: &str) -> Self {
        match answer.trim().to_lowercase().as_str() {
            "public" => Visibility::Public,
            _ => Visibility::Private,
        }
    }

    /// Flag understood by `gh repo create`
    pub fn as_flag(&self) -> &'static str {
        match self {
            Visibility::Public => "--public",
            Visibility::Private => "--private",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// Ask for the remote repository visibility
pub fn ask_visibility(input: &mut dyn Input) -> Result<Visibility> {
    let answer = input.ask("GitHub repo visibility? [public/private] (default: private): ")?;
    Ok(Visibility::parse(&answer))
}
