// file: src/config/mod.rs
// version: 2.0.0
// guid: 9d4b2e71-0f6a-4c38-b5e2-7a13c8f0d6e4

//! Pipeline settings
//!
//! Every path, host and identifier the pipeline touches. The defaults are the
//! StoryMaker content layout; a TOML file can override any subset of them.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Package identifier of the target application
pub const PACKAGE_NAME: &str = "org.storymaker.app";

/// One content bundle: a source directory zipped into an expansion file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    /// Source directory, relative to the assets directory
    pub source: String,
    /// Archive filename written into the assets directory
    pub archive: String,
}

impl Bundle {
    pub fn new(source: impl Into<String>, archive: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            archive: archive.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub package_name: String,
    pub content_repo: String,
    pub content_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub python: String,
    pub localization_cli: String,
    /// `host:path` that receives uploaded bundles
    pub remote_target: String,
    /// Files with this suffix are stored without compression
    pub store_extension: String,
    pub bundles: Vec<Bundle>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            package_name: PACKAGE_NAME.to_string(),
            content_repo: "https://github.com/scalio/liger-content.git".to_string(),
            content_dir: PathBuf::from("liger-content"),
            assets_dir: PathBuf::from("assets"),
            python: "python".to_string(),
            localization_cli: "tx".to_string(),
            remote_target: "web414.webfaction.com:/home/swn/webapps/storymaker/appdata/obb"
                .to_string(),
            store_extension: ".mp4".to_string(),
            bundles: vec![
                Bundle::new(
                    format!("{}/default", PACKAGE_NAME),
                    format!("main.1031.{}.obb", PACKAGE_NAME),
                ),
                Bundle::new(
                    format!("{}/learning_guide", PACKAGE_NAME),
                    "learning_guide.main.1.obb",
                ),
                Bundle::new(format!("{}/burundi", PACKAGE_NAME), "burundi.main.2.obb"),
                Bundle::new(format!("{}/dressgate", PACKAGE_NAME), "dressgate.main.1.obb"),
            ],
        }
    }
}

impl Settings {
    /// Directory holding the generated assets and the bundle archives
    pub fn assets_path(&self) -> PathBuf {
        self.content_dir.join(&self.assets_dir)
    }

    /// The expansion file pushed to the device obb directory
    pub fn main_bundle(&self) -> Option<&Bundle> {
        self.bundles.first()
    }

    /// Device directory for the main expansion file
    pub fn device_obb_dir(&self) -> String {
        format!("/sdcard/Android/obb/{}", self.package_name)
    }

    /// Device directory for the secondary bundle files
    pub fn device_files_dir(&self) -> String {
        format!("/sdcard/Android/data/{}/files", self.package_name)
    }

    /// Upload destination for a bundle; uploads land under a `.tmp` name
    pub fn remote_destination(&self, archive: &str) -> String {
        format!(
            "{}/{}.tmp",
            self.remote_target.trim_end_matches('/'),
            archive
        )
    }

    /// Validate settings loaded from a file
    pub fn validate(&self) -> crate::Result<()> {
        if self.package_name.trim().is_empty() {
            return Err(crate::ContentError::config("package_name must not be empty"));
        }
        if self.content_dir.as_os_str().is_empty() {
            return Err(crate::ContentError::config("content_dir must not be empty"));
        }
        if self.bundles.is_empty() {
            return Err(crate::ContentError::config(
                "at least one bundle must be defined",
            ));
        }
        if let Some(bundle) = self
            .bundles
            .iter()
            .find(|b| b.source.is_empty() || b.archive.is_empty())
        {
            return Err(crate::ContentError::config(format!(
                "bundle has an empty source or archive: {:?}",
                bundle
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bundles() {
        let settings = Settings::default();

        let archives: Vec<&str> = settings.bundles.iter().map(|b| b.archive.as_str()).collect();
        assert_eq!(
            archives,
            vec![
                "main.1031.org.storymaker.app.obb",
                "learning_guide.main.1.obb",
                "burundi.main.2.obb",
                "dressgate.main.1.obb",
            ]
        );
        assert_eq!(settings.bundles[0].source, "org.storymaker.app/default");
        assert_eq!(settings.bundles[3].source, "org.storymaker.app/dressgate");
    }

    #[test]
    fn test_device_paths_use_package_name() {
        let settings = Settings::default();
        assert_eq!(settings.device_obb_dir(), "/sdcard/Android/obb/org.storymaker.app");
        assert_eq!(
            settings.device_files_dir(),
            "/sdcard/Android/data/org.storymaker.app/files"
        );
    }

    #[test]
    fn test_remote_destination_has_tmp_suffix() {
        let mut settings = Settings::default();
        settings.remote_target = "host:/srv/obb/".to_string();
        assert_eq!(
            settings.remote_destination("burundi.main.2.obb"),
            "host:/srv/obb/burundi.main.2.obb.tmp"
        );
    }

    #[test]
    fn test_assets_path() {
        let settings = Settings::default();
        assert_eq!(settings.assets_path(), PathBuf::from("liger-content/assets"));
    }

    #[test]
    fn test_validate_default() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_bundles() {
        let settings = Settings {
            bundles: Vec::new(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(crate::ContentError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_package() {
        let settings = Settings {
            package_name: "  ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
