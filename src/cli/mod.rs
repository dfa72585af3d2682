// file: src/cli/mod.rs
// version: 2.0.0
// guid: 0e7c5a92-3d41-4b86-a1f9-c28b6e0d4f37

//! Command line interface for the content tool

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::*;
