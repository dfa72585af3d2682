// file: src/main.rs
// version: 2.0.0
// guid: f85a1c37-9e02-4d6b-b3a4-7c0e21d9f6b8

//! Content tool - main entry point

use clap::Parser;
use content_tool::{
    cli::{check_prerequisites_command, operation_command, Cli},
    config::loader::ConfigLoader,
    logging::logger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.quiet)?;

    let settings = ConfigLoader::resolve(cli.config.as_deref())?;

    match cli.command.operation() {
        Some(operation) => operation_command(operation, settings, cli.dry_run).await?,
        None => check_prerequisites_command(&settings)?,
    }

    Ok(())
}
