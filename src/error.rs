// file: src/error.rs
// version: 3.0.0
// guid: 0c5e8f2a-93b1-4d7e-a6c2-5f18d4b7e903

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, ContentError>;

/// Error types for the content pipeline
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to run `{command}`: {message}")]
    Process { command: String, message: String },
}

impl ContentError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new process error
    pub fn process(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Process {
            command: command.into(),
            message: message.into(),
        }
    }
}
