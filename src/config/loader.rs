// file: src/config/loader.rs
// version: 2.0.0
// guid: 51c7e0a9-8b3d-4f26-9a14-e2d6b8f03c57

//! Settings file loading

use super::Settings;
use crate::Result;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Loads pipeline settings from an optional TOML file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings from a TOML file; fields absent from the file keep their defaults
    pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            crate::ContentError::config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let settings = Self::parse_settings(&content)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from TOML text
    pub fn parse_settings(content: &str) -> Result<Settings> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        debug!("Settings: {:?}", settings);
        Ok(settings)
    }

    /// Built-in settings, or the file's settings when a path is given
    pub fn resolve(path: Option<&Path>) -> Result<Settings> {
        match path {
            Some(path) => Self::load_settings(path),
            None => Ok(Settings::default()),
        }
    }
}
