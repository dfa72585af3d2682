// file: src/pipeline/transfer.rs
// version: 1.0.0
// guid: d1f84b62-0a3c-4e57-b9d2-7c58e6a0f31b

//! Bundle delivery to the web server and to an attached device

use super::Pipeline;
use crate::prompt::Confirm;
use crate::runner::CommandRunner;
use crate::Result;
use tracing::{info, warn};

impl<R: CommandRunner, C: Confirm> Pipeline<R, C> {
    /// Upload each confirmed bundle to the remote host under a `.tmp` name
    pub async fn scp_push(&mut self) -> Result<()> {
        let bundles = self.settings.bundles.clone();

        for bundle in &bundles {
            if !self
                .prompt
                .confirm(&format!("scp {} to server?", bundle.archive))?
            {
                info!("Skipping upload of {}", bundle.archive);
                continue;
            }

            let destination = self.settings.remote_destination(&bundle.archive);
            let call = self
                .in_assets("scp")
                .args([bundle.archive.as_str(), destination.as_str()]);
            self.exec(call).await;
            println!("scp pushed {}.tmp", bundle.archive);
        }
        Ok(())
    }

    /// Push the main expansion file into the device obb directory
    pub async fn adb_push_obb(&mut self) -> Result<()> {
        let Some(main) = self.settings.main_bundle().cloned() else {
            warn!("No bundles configured, nothing to push");
            return Ok(());
        };

        let destination = format!("{}/{}", self.settings.device_obb_dir(), main.archive);
        let call = self
            .in_assets("adb")
            .args(["push", main.archive.as_str(), destination.as_str()]);
        self.exec(call).await;
        Ok(())
    }

    /// Push each confirmed bundle into the app's files directory on the device
    pub async fn adb_push_files(&mut self) -> Result<()> {
        let bundles = self.settings.bundles.clone();
        let files_dir = self.settings.device_files_dir();

        for bundle in &bundles {
            if !self.prompt.confirm(&format!(
                "adb push {} to device files/ folder?",
                bundle.archive
            ))? {
                info!("Skipping device push of {}", bundle.archive);
                continue;
            }

            let destination = format!("{}/{}", files_dir, bundle.archive);
            let call = self
                .in_assets("adb")
                .args(["push", bundle.archive.as_str(), destination.as_str()]);
            self.exec(call).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{history_of, pipeline_with_answers};
    use super::super::Operation;
    use crate::runner::{ProcessCall, Step};

    const REMOTE: &str = "web414.webfaction.com:/home/swn/webapps/storymaker/appdata/obb";
    const FILES: &str = "/sdcard/Android/data/org.storymaker.app/files";

    fn in_assets(program: &str, args: &[&str]) -> Step {
        Step::Run(
            ProcessCall::new(program)
                .args(args.iter().copied())
                .current_dir("liger-content/assets"),
        )
    }

    #[tokio::test]
    async fn test_scp_push_all_confirmed() {
        let history = history_of(Operation::ScpPush, "y\ny\ny\ny\n").await;

        assert_eq!(history.len(), 4);
        assert_eq!(
            history[0],
            in_assets(
                "scp",
                &[
                    "main.1031.org.storymaker.app.obb",
                    &format!("{}/main.1031.org.storymaker.app.obb.tmp", REMOTE),
                ]
            )
        );
        assert_eq!(
            history[3],
            in_assets(
                "scp",
                &[
                    "dressgate.main.1.obb",
                    &format!("{}/dressgate.main.1.obb.tmp", REMOTE),
                ]
            )
        );
    }

    #[tokio::test]
    async fn test_scp_push_skips_declined() {
        // Arrange: decline the first and third bundles
        let answers = "n\n\nno\nyes\n";

        // Act
        let history = history_of(Operation::ScpPush, answers).await;

        // Assert
        assert_eq!(
            history,
            vec![
                in_assets(
                    "scp",
                    &[
                        "learning_guide.main.1.obb",
                        &format!("{}/learning_guide.main.1.obb.tmp", REMOTE),
                    ]
                ),
                in_assets(
                    "scp",
                    &[
                        "dressgate.main.1.obb",
                        &format!("{}/dressgate.main.1.obb.tmp", REMOTE),
                    ]
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_scp_push_asks_once_per_bundle() {
        let mut pipeline = pipeline_with_answers("n\nn\nn\nn\n");

        pipeline.dispatch(Operation::ScpPush).await.unwrap();

        let (runner, prompt) = pipeline.into_parts();
        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert!(runner.history().is_empty());
        assert_eq!(output.matches("to server? [Y/n] ").count(), 4);
        assert!(output.starts_with("scp main.1031.org.storymaker.app.obb to server?"));
    }

    #[tokio::test]
    async fn test_adb_push_obb_uses_main_bundle() {
        let history = history_of(Operation::AdbPushObb, "").await;

        assert_eq!(
            history,
            vec![in_assets(
                "adb",
                &[
                    "push",
                    "main.1031.org.storymaker.app.obb",
                    "/sdcard/Android/obb/org.storymaker.app/main.1031.org.storymaker.app.obb",
                ]
            )]
        );
    }

    #[tokio::test]
    async fn test_adb_push_files_skips_declined() {
        let history = history_of(Operation::AdbPushFiles, "y\nn\nn\ny\n").await;

        assert_eq!(
            history,
            vec![
                in_assets(
                    "adb",
                    &[
                        "push",
                        "main.1031.org.storymaker.app.obb",
                        &format!("{}/main.1031.org.storymaker.app.obb", FILES),
                    ]
                ),
                in_assets(
                    "adb",
                    &[
                        "push",
                        "dressgate.main.1.obb",
                        &format!("{}/dressgate.main.1.obb", FILES),
                    ]
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_adb_push_matches_adb_push_files() {
        let answers = "n\ny\ny\nn\n";

        let alias = history_of(Operation::AdbPush, answers).await;
        let direct = history_of(Operation::AdbPushFiles, answers).await;

        assert_eq!(alias, direct);
        assert_eq!(alias.len(), 2);
    }
}
