//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line interface for inspecting aria2 status payloads.
///
/// Reads a `tellStatus` or `tell*` response (or just its `result`) and prints
/// either a one-line summary per download or the normalized wire JSON.
#[derive(Debug, Parser)]
#[command(name = "arigo")]
#[command(about = "Inspect aria2 download status payloads")]
#[command(version)]
pub struct Cli {
    /// JSON file to read. Omit or pass `-` to read stdin
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, env = "ARIGO_OUTPUT", default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// How decoded statuses are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per download
    Summary,
    /// Re-encoded aria2 wire JSON
    Json,
}
