// file: src/lib.rs
// version: 3.0.0
// guid: 6c2f8e05-a937-4b1d-8e60-d4b9a17c3e52

//! # Content Tool
//!
//! Drives the StoryMaker content pipeline: checking out the content
//! repository, running its generator scripts, syncing strings with the
//! localization service, zipping asset bundles and delivering them to the
//! content server or an attached device.
//!
//! Every step is an external program. Steps run one at a time, and a failing
//! program is reported without stopping the steps after it. Uploads and
//! device pushes are confirmed one bundle at a time.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod prompt;
pub mod runner;

pub use error::{ContentError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
