// file: src/cli/args.rs
// version: 2.0.0
// guid: 4a8d3f10-b62e-4c71-95e8-1f0c7b2d6a93

//! Command line argument definitions

use crate::pipeline::Operation;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "content-tool")]
#[command(about = "Build, translate, bundle and deliver StoryMaker content")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[arg(long, global = true, help = "Print each step instead of running it")]
    pub dry_run: bool,

    #[arg(short, long, global = true, help = "TOML file overriding the built-in settings")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Clone the content git repository
    #[command(name = "clone")]
    Clone,

    /// Update the content repository
    #[command(name = "pull")]
    Pull,

    /// Generate JSON from YAML and split out translation intermediates
    #[command(name = "generate_json", alias = "generate-json")]
    GenerateJson,

    /// Regenerate content, then push source strings to the localization service
    #[command(name = "push_strings", alias = "push-strings")]
    PushStrings,

    /// Pull translated strings and generate localized JSON
    #[command(name = "update_strings", alias = "update-strings")]
    UpdateStrings,

    /// Zip each content bundle into its .obb archive
    #[command(name = "zip_content", alias = "zip-content")]
    ZipContent,

    /// Upload the bundle archives to the content server
    #[command(name = "scp_push", alias = "scp-push")]
    ScpPush,

    /// adb push the main bundle to /sdcard/Android/obb/<package>
    #[command(name = "adb_push_obb", alias = "adb-push-obb")]
    AdbPushObb,

    /// adb push the bundles to /sdcard/Android/data/<package>/files
    #[command(name = "adb_push_files", alias = "adb-push-files")]
    AdbPushFiles,

    /// Same as adb_push_files
    #[command(name = "adb_push", alias = "adb-push")]
    AdbPush,

    /// Build the JSON, zip it, push it to the device
    #[command(name = "build_zip_push", alias = "build-zip-push")]
    BuildZipPush,

    /// Check that the external tools are installed
    #[command(name = "check_prereqs", alias = "check-prereqs")]
    CheckPrereqs,
}

impl Commands {
    /// The pipeline operation behind this subcommand, if any
    pub fn operation(self) -> Option<Operation> {
        match self {
            Commands::Clone => Some(Operation::Clone),
            Commands::Pull => Some(Operation::Pull),
            Commands::GenerateJson => Some(Operation::GenerateJson),
            Commands::PushStrings => Some(Operation::PushStrings),
            Commands::UpdateStrings => Some(Operation::UpdateStrings),
            Commands::ZipContent => Some(Operation::ZipContent),
            Commands::ScpPush => Some(Operation::ScpPush),
            Commands::AdbPushObb => Some(Operation::AdbPushObb),
            Commands::AdbPushFiles => Some(Operation::AdbPushFiles),
            Commands::AdbPush => Some(Operation::AdbPush),
            Commands::BuildZipPush => Some(Operation::BuildZipPush),
            Commands::CheckPrereqs => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_every_operation_has_a_subcommand() {
        for operation in Operation::ALL {
            let cli = Cli::try_parse_from(["content-tool", operation.name()]).unwrap();
            assert_eq!(cli.command.operation(), Some(operation));
        }
    }

    #[test]
    fn test_kebab_case_alias() {
        let cli = Cli::try_parse_from(["content-tool", "build-zip-push"]).unwrap();
        assert_eq!(cli.command, Commands::BuildZipPush);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "content-tool",
            "zip_content",
            "--dry-run",
            "-v",
            "--config",
            "settings.toml",
        ])
        .unwrap();

        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("settings.toml")));
    }

    #[test]
    fn test_subcommands_take_no_arguments() {
        assert!(Cli::try_parse_from(["content-tool", "pull", "extra"]).is_err());
    }

    #[test]
    fn test_check_prereqs_has_no_operation() {
        assert_eq!(Commands::CheckPrereqs.operation(), None);
    }
}
