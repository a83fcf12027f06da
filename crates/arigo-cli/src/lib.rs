//! Command-line inspector for aria2 status payloads.
//!
//! The binary lives in `main.rs`; this library holds the argument parser,
//! handlers and presentation helpers so they can be tested directly.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use anyhow as _;
use tracing_subscriber as _;

// Only used by the integration tests
#[cfg(test)]
use tempfile as _;

pub mod error;
pub mod handlers;
pub mod input;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use error::CliError;
pub use parser::{Cli, OutputFormat};
