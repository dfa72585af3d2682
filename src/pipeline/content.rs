// file: src/pipeline/content.rs
// version: 1.0.0
// guid: 5b07d2c8-e49a-4f13-86bd-0a7c3e91f254

//! Content checkout, generation and translation steps

use super::Pipeline;
use crate::prompt::Confirm;
use crate::runner::{CommandRunner, ProcessCall};
use crate::Result;

const GENERATE_CONTENT: &str = "generate_content.py";
const GENERATE_LOCALIZED: &str = "generate_localized_content.py";
const PULL_TRANSLATIONS: &str = "pull-translations.py";

impl<R: CommandRunner, C: Confirm> Pipeline<R, C> {
    /// Clone the content repository into the current directory
    pub async fn clone_repo(&mut self) -> Result<()> {
        let call = ProcessCall::new("git").args(["clone", self.settings.content_repo.as_str()]);
        self.exec(call).await;
        Ok(())
    }

    /// Update the content checkout
    pub async fn pull(&mut self) -> Result<()> {
        let call = self.in_content("git").arg("pull");
        self.exec(call).await;
        Ok(())
    }

    /// Generate JSON from the YAML sources and split out translation intermediates
    pub async fn generate_json(&mut self) -> Result<()> {
        self.run_script(GENERATE_CONTENT).await;
        self.run_script(GENERATE_LOCALIZED).await;
        Ok(())
    }

    /// Regenerate content to extract the latest source strings, then upload them
    pub async fn push_strings(&mut self) -> Result<()> {
        println!("\nupdating content...\n");
        self.run_script(GENERATE_CONTENT).await;

        println!("\npushing strings to the localization service...\n");
        let call = self
            .in_content(&self.settings.localization_cli)
            .args(["push", "-s"]);
        self.exec(call).await;
        Ok(())
    }

    /// Download translated strings and regenerate the localized content
    pub async fn update_strings(&mut self) -> Result<()> {
        println!("\npulling translations from the localization service...\n");
        self.run_script(PULL_TRANSLATIONS).await;

        println!("\ngenerating localized content...\n");
        self.run_script(GENERATE_LOCALIZED).await;
        Ok(())
    }

    async fn run_script(&mut self, script: &str) {
        let call = self.in_content(&self.settings.python).arg(script);
        self.exec(call).await;
    }
}
