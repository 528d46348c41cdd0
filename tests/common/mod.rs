//! Test doubles shared by the integration tests
//!
//! A scripted terminal and a runner that records commands instead of
//! spawning them.

#![allow(dead_code)]

use anyhow::Result;
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;

use newproj::process::{CommandOutput, CommandRunner, ExternalCommand};
use newproj::prompt::Input;

/// Replays a fixed list of answers and records every prompt shown
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Prompts shown so far, in order
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Input for ScriptedInput {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        // Running out of script behaves like EOF on stdin
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// In-memory runner that records calls instead of spawning processes
///
/// Exit codes are scripted per command prefix. A rule with several codes
/// hands them out in order and then keeps repeating the last one.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<ExternalCommand>>,
    programs: RefCell<HashSet<String>>,
    responses: RefCell<Vec<(String, VecDeque<i32>)>>,
    installs: Vec<(String, String)>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a program as present on `PATH`
    pub fn with_program(self, program: &str) -> Self {
        self.programs.borrow_mut().insert(program.to_string());
        self
    }

    /// Exit codes for commands whose rendered form starts with `prefix`
    pub fn respond(self, prefix: &str, codes: &[i32]) -> Self {
        self.responses
            .borrow_mut()
            .push((prefix.to_string(), codes.iter().copied().collect()));
        self
    }

    /// A successful run of `prefix` makes `program` present
    pub fn installs(mut self, prefix: &str, program: &str) -> Self {
        self.installs.push((prefix.to_string(), program.to_string()));
        self
    }

    /// Everything run so far
    pub fn calls(&self) -> Vec<ExternalCommand> {
        self.calls.borrow().clone()
    }

    /// Rendered command lines, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }

    fn next_code(&self, line: &str) -> i32 {
        let mut responses = self.responses.borrow_mut();
        for (prefix, codes) in responses.iter_mut() {
            if line.starts_with(prefix.as_str()) {
                return if codes.len() > 1 {
                    codes.pop_front().unwrap_or(0)
                } else {
                    codes.front().copied().unwrap_or(0)
                };
            }
        }
        0
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, cmd: &ExternalCommand) -> Result<CommandOutput> {
        let line = cmd.to_string();
        self.calls.borrow_mut().push(cmd.clone());

        let code = self.next_code(&line);
        if code == 0 {
            for (prefix, program) in &self.installs {
                if line.starts_with(prefix.as_str()) {
                    self.programs.borrow_mut().insert(program.clone());
                }
            }
        }
        Ok(CommandOutput::from_code(code))
    }

    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.programs
            .borrow()
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}
