// file: src/runner/local.rs
// version: 2.0.0
// guid: 7a30f5d2-c148-4e9b-8d67-2b5e09f4a1c3

//! Local process execution

use super::{CommandRunner, Outcome, ProcessCall};
use crate::{ContentError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Runs steps on this machine with the terminal attached
#[derive(Debug, Default)]
pub struct LocalRunner;

impl LocalRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for LocalRunner {
    async fn run(&mut self, call: &ProcessCall) -> Result<Outcome> {
        info!("Executing: {}", call);

        let mut cmd = Command::new(&call.program);
        cmd.args(&call.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(dir) = &call.cwd {
            cmd.current_dir(dir);
        }

        let status = cmd.status().await.map_err(|e| {
            let message = if which::which(&call.program).is_err() {
                format!("{} not found on PATH", call.program)
            } else {
                e.to_string()
            };
            ContentError::process(call.to_string(), message)
        })?;

        if status.success() {
            debug!("Command executed successfully");
            Ok(Outcome::Success)
        } else {
            Ok(Outcome::Failed(status.code()))
        }
    }

    async fn remove_file(&mut self, path: &Path) -> Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => debug!("Removed {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Nothing to remove at {}", path.display())
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }
}
