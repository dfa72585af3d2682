// file: src/pipeline/mod.rs
// version: 1.0.0
// guid: c93e1f56-7b28-4d0a-9e41-58a6f2d7b0c8

//! Content pipeline operations
//!
//! Each [`Operation`] expands into primitive [`Task`]s that run in order.
//! Sub-process failures are logged and never stop the sequence; only prompt
//! I/O errors end an operation early.

mod bundles;
mod content;
mod transfer;

use crate::config::Settings;
use crate::prompt::Confirm;
use crate::runner::{CommandRunner, Outcome, ProcessCall};
use crate::Result;
use std::path::Path;
use tracing::{debug, info, warn, Instrument};

/// Named operations offered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Clone,
    Pull,
    GenerateJson,
    PushStrings,
    UpdateStrings,
    ZipContent,
    ScpPush,
    AdbPushObb,
    AdbPushFiles,
    /// Same as [`Operation::AdbPushFiles`]
    AdbPush,
    /// generate_json, zip_content, then adb_push
    BuildZipPush,
}

/// A single step that maps directly to process calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Clone,
    Pull,
    GenerateJson,
    PushStrings,
    UpdateStrings,
    ZipContent,
    ScpPush,
    AdbPushObb,
    AdbPushFiles,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::Clone,
        Operation::Pull,
        Operation::GenerateJson,
        Operation::PushStrings,
        Operation::UpdateStrings,
        Operation::ZipContent,
        Operation::ScpPush,
        Operation::AdbPushObb,
        Operation::AdbPushFiles,
        Operation::AdbPush,
        Operation::BuildZipPush,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Clone => "clone",
            Operation::Pull => "pull",
            Operation::GenerateJson => "generate_json",
            Operation::PushStrings => "push_strings",
            Operation::UpdateStrings => "update_strings",
            Operation::ZipContent => "zip_content",
            Operation::ScpPush => "scp_push",
            Operation::AdbPushObb => "adb_push_obb",
            Operation::AdbPushFiles => "adb_push_files",
            Operation::AdbPush => "adb_push",
            Operation::BuildZipPush => "build_zip_push",
        }
    }

    /// The primitive tasks this operation runs, in order
    pub fn tasks(self) -> Vec<Task> {
        match self {
            Operation::Clone => vec![Task::Clone],
            Operation::Pull => vec![Task::Pull],
            Operation::GenerateJson => vec![Task::GenerateJson],
            Operation::PushStrings => vec![Task::PushStrings],
            Operation::UpdateStrings => vec![Task::UpdateStrings],
            Operation::ZipContent => vec![Task::ZipContent],
            Operation::ScpPush => vec![Task::ScpPush],
            Operation::AdbPushObb => vec![Task::AdbPushObb],
            Operation::AdbPushFiles => vec![Task::AdbPushFiles],
            Operation::AdbPush => Operation::AdbPushFiles.tasks(),
            Operation::BuildZipPush => [
                Operation::GenerateJson,
                Operation::ZipContent,
                Operation::AdbPush,
            ]
            .into_iter()
            .flat_map(Operation::tasks)
            .collect(),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Task {
    pub fn name(self) -> &'static str {
        match self {
            Task::Clone => "clone",
            Task::Pull => "pull",
            Task::GenerateJson => "generate_json",
            Task::PushStrings => "push_strings",
            Task::UpdateStrings => "update_strings",
            Task::ZipContent => "zip_content",
            Task::ScpPush => "scp_push",
            Task::AdbPushObb => "adb_push_obb",
            Task::AdbPushFiles => "adb_push_files",
        }
    }
}

/// Runs operations against a runner, asking `prompt` before transfers
pub struct Pipeline<R, C> {
    settings: Settings,
    runner: R,
    prompt: C,
}

impl<R: CommandRunner, C: Confirm> Pipeline<R, C> {
    pub fn new(settings: Settings, runner: R, prompt: C) -> Self {
        Self {
            settings,
            runner,
            prompt,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_parts(self) -> (R, C) {
        (self.runner, self.prompt)
    }

    /// Run every task of `operation` in order
    pub async fn dispatch(&mut self, operation: Operation) -> Result<()> {
        info!("Running {}", operation);
        for task in operation.tasks() {
            let span = tracing::info_span!("operation", name = task.name());
            self.run_task(task).instrument(span).await?;
        }
        Ok(())
    }

    async fn run_task(&mut self, task: Task) -> Result<()> {
        match task {
            Task::Clone => self.clone_repo().await,
            Task::Pull => self.pull().await,
            Task::GenerateJson => self.generate_json().await,
            Task::PushStrings => self.push_strings().await,
            Task::UpdateStrings => self.update_strings().await,
            Task::ZipContent => self.zip_content().await,
            Task::ScpPush => self.scp_push().await,
            Task::AdbPushObb => self.adb_push_obb().await,
            Task::AdbPushFiles => self.adb_push_files().await,
        }
    }

    /// Run a process, logging failures without stopping
    async fn exec(&mut self, call: ProcessCall) {
        match self.runner.run(&call).await {
            Ok(Outcome::Failed(code)) => match code {
                Some(code) => warn!("`{}` exited with status {}", call.command_line(), code),
                None => warn!("`{}` was terminated by a signal", call.command_line()),
            },
            Ok(outcome) => debug!("`{}` finished: {:?}", call.command_line(), outcome),
            Err(e) => warn!("{}", e),
        }
    }

    /// Delete a file, logging failures without stopping
    async fn remove(&mut self, path: &Path) {
        if let Err(e) = self.runner.remove_file(path).await {
            warn!("Could not remove {}: {}", path.display(), e);
        }
    }

    /// A call that runs inside the content checkout
    fn in_content(&self, program: &str) -> ProcessCall {
        ProcessCall::new(program).current_dir(&self.settings.content_dir)
    }

    /// A call that runs inside the assets directory
    fn in_assets(&self, program: &str) -> ProcessCall {
        ProcessCall::new(program).current_dir(self.settings.assets_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ConsolePrompt;
    use crate::runner::{DryRunRunner, Step};
    use std::io::Cursor;

    type TestPipeline = Pipeline<DryRunRunner, ConsolePrompt<Cursor<Vec<u8>>, Vec<u8>>>;

    pub(super) fn pipeline_with_answers(answers: &str) -> TestPipeline {
        Pipeline::new(
            Settings::default(),
            DryRunRunner::new(),
            ConsolePrompt::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new()),
        )
    }

    pub(super) async fn history_of(operation: Operation, answers: &str) -> Vec<Step> {
        let mut pipeline = pipeline_with_answers(answers);
        pipeline.dispatch(operation).await.unwrap();
        pipeline.runner().history().to_vec()
    }

    #[test]
    fn test_adb_push_is_alias_of_adb_push_files() {
        assert_eq!(Operation::AdbPush.tasks(), Operation::AdbPushFiles.tasks());
    }

    #[test]
    fn test_build_zip_push_tasks() {
        assert_eq!(
            Operation::BuildZipPush.tasks(),
            vec![Task::GenerateJson, Task::ZipContent, Task::AdbPushFiles]
        );
    }

    #[test]
    fn test_every_task_name_matches_an_operation() {
        for operation in Operation::ALL {
            for task in operation.tasks() {
                assert!(Operation::ALL.iter().any(|op| op.name() == task.name()));
            }
        }
    }

    #[tokio::test]
    async fn test_build_zip_push_matches_individual_operations() {
        // Arrange
        let answers = "y\nn\ny\nn\n";
        let mut expected = Vec::new();
        let mut separate = pipeline_with_answers(answers);

        // Act
        for operation in [
            Operation::GenerateJson,
            Operation::ZipContent,
            Operation::AdbPush,
        ] {
            separate.dispatch(operation).await.unwrap();
        }
        expected.extend_from_slice(separate.runner().history());
        let combined = history_of(Operation::BuildZipPush, answers).await;

        // Assert
        assert_eq!(combined, expected);
        assert!(!combined.is_empty());
    }

    #[tokio::test]
    async fn test_prompt_error_stops_operation() {
        // No answers available: the first confirmation hits end of input.
        let mut pipeline = pipeline_with_answers("");

        let result = pipeline.dispatch(Operation::ScpPush).await;

        assert!(matches!(result, Err(crate::ContentError::Io(_))));
        assert!(pipeline.runner().history().is_empty());
    }
}
