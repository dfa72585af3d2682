// file: src/logging/mod.rs
// version: 2.0.0
// guid: 3e9a7c41-5d08-4b2f-8f13-a6d2c0e4b771

//! Logging setup for the content tool

pub mod logger;

pub use logger::init_logger;
