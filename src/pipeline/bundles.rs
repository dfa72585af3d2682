// file: src/pipeline/bundles.rs
// version: 1.0.0
// guid: 8e2a6c13-4f7b-4d95-a0e8-c6b15d3f92a7

//! Bundle archive creation

use super::Pipeline;
use crate::prompt::Confirm;
use crate::runner::CommandRunner;
use crate::Result;

impl<R: CommandRunner, C: Confirm> Pipeline<R, C> {
    /// Rebuild every bundle archive from its source directory.
    ///
    /// The previous archive is always deleted first so `zip` starts fresh
    /// instead of updating it in place.
    pub async fn zip_content(&mut self) -> Result<()> {
        let bundles = self.settings.bundles.clone();
        let assets = self.settings.assets_path();

        for bundle in &bundles {
            let archive_path = assets.join(&bundle.archive);
            self.remove(&archive_path).await;

            let call = self.in_assets("zip").args([
                "-n",
                self.settings.store_extension.as_str(),
                "-r",
                bundle.archive.as_str(),
                bundle.source.as_str(),
            ]);
            self.exec(call).await;

            println!("content generated at: {}", archive_path.display());
        }
        Ok(())
    }
}
