// file: src/runner/mod.rs
// version: 1.0.0
// guid: e4c81b37-2d9f-4a06-b7e5-91f3a0c6d825

//! Process execution for pipeline steps
//!
//! The pipeline never spawns processes itself; it hands every step to a
//! [`CommandRunner`]. [`LocalRunner`] runs them, [`DryRunRunner`] only
//! records and prints them.

pub mod dry_run;
pub mod local;

pub use dry_run::DryRunRunner;
pub use local::LocalRunner;

use crate::Result;
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

/// A single external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl ProcessCall {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Program and arguments joined by spaces
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for ProcessCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cwd {
            Some(dir) => write!(f, "(in {}) {}", dir.display(), self.command_line()),
            None => f.write_str(&self.command_line()),
        }
    }
}

/// A step handed to a runner, as recorded by [`DryRunRunner`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Run(ProcessCall),
    Remove(PathBuf),
}

/// How a process call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Non-zero exit; `None` when killed by a signal
    Failed(Option<i32>),
    /// Not executed
    DryRun,
}

/// Executes pipeline steps
pub trait CommandRunner {
    /// Run a process to completion
    fn run(&mut self, call: &ProcessCall) -> impl Future<Output = Result<Outcome>> + Send;

    /// Delete a file; a missing file is not an error
    fn remove_file(&mut self, path: &Path) -> impl Future<Output = Result<()>> + Send;
}

/// Names from `tools` that cannot be found on `PATH`
pub fn missing_tools<'a, I>(tools: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    tools
        .into_iter()
        .filter(|tool| which::which(tool).is_err())
        .map(str::to_string)
        .collect()
}
