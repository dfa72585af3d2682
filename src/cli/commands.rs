// file: src/cli/commands.rs
// version: 2.0.0
// guid: 93b6e2d4-18f7-4a05-bc3e-6d2a0f81c579

//! Command implementations for the CLI

use crate::{
    config::Settings,
    pipeline::{Operation, Pipeline},
    prompt::ConsolePrompt,
    runner::{missing_tools, CommandRunner, DryRunRunner, LocalRunner},
    Result,
};
use tracing::{error, info};

/// Run a pipeline operation against the console
pub async fn operation_command(
    operation: Operation,
    settings: Settings,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        info!("DRY RUN: no commands will be executed");
        run_with(operation, settings, DryRunRunner::new()).await
    } else {
        run_with(operation, settings, LocalRunner::new()).await
    }
}

async fn run_with<R: CommandRunner>(
    operation: Operation,
    settings: Settings,
    runner: R,
) -> Result<()> {
    let mut pipeline = Pipeline::new(settings, runner, ConsolePrompt::stdio());
    pipeline.dispatch(operation).await?;
    info!("{} finished", operation);
    Ok(())
}

/// External programs the pipeline calls
pub fn required_tools(settings: &Settings) -> Vec<&str> {
    vec![
        "git",
        settings.python.as_str(),
        settings.localization_cli.as_str(),
        "zip",
        "scp",
        "adb",
    ]
}

/// Report external tools missing from PATH
pub fn check_prerequisites_command(settings: &Settings) -> Result<()> {
    info!("Checking external tools used by the content pipeline");

    let missing = missing_tools(required_tools(settings));

    if missing.is_empty() {
        info!("✓ All required commands are available");
    } else {
        error!("✗ Missing required commands: {}", missing.join(", "));
    }

    if !settings.content_dir.exists() {
        info!(
            "⚠ Content checkout {} not found - run `clone` first",
            settings.content_dir.display()
        );
    }

    Ok(())
}
