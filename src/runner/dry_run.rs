// file: src/runner/dry_run.rs
// version: 1.0.0
// guid: 2f6d9a84-b015-4c7e-a3f8-d61c27e5b940

use super::{CommandRunner, Outcome, ProcessCall, Step};
use crate::Result;
use std::path::Path;
use tracing::info;

/// Prints steps instead of running them and keeps them in order
#[derive(Debug, Default)]
pub struct DryRunRunner {
    history: Vec<Step>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every step seen so far, in order
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Only the process calls, in order
    pub fn calls(&self) -> Vec<&ProcessCall> {
        self.history
            .iter()
            .filter_map(|step| match step {
                Step::Run(call) => Some(call),
                Step::Remove(_) => None,
            })
            .collect()
    }
}

impl CommandRunner for DryRunRunner {
    async fn run(&mut self, call: &ProcessCall) -> Result<Outcome> {
        info!("DRY RUN: Would execute: {}", call);
        println!("DRY RUN: Would execute: {}", call);
        self.history.push(Step::Run(call.clone()));
        Ok(Outcome::DryRun)
    }

    async fn remove_file(&mut self, path: &Path) -> Result<()> {
        info!("DRY RUN: Would remove: {}", path.display());
        println!("DRY RUN: Would remove: {}", path.display());
        self.history.push(Step::Remove(path.to_path_buf()));
        Ok(())
    }
}
