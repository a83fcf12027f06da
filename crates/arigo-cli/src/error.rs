//! CLI-specific error types and exit code mapping.

use arigo_core::StatusError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file does not exist.
    #[error("Input not found: {0}")]
    NoInput(String),

    /// Reading the input failed.
    #[error("IO error: {0}")]
    Io(String),

    /// The payload could not be decoded.
    #[error("Could not decode status: {0}")]
    Decode(String),

    /// aria2 answered with an error object.
    #[error("aria2 returned an error: {0}")]
    Rpc(String),

    /// Rendering the output failed.
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Map error to a sysexits.h exit code.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::NoInput(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,      // EX_IOERR
            Self::Decode(_) => 65,  // EX_DATAERR
            Self::Rpc(_) => 69,     // EX_UNAVAILABLE
            Self::Output(_) => 70,  // EX_SOFTWARE
        }
    }
}

impl From<StatusError> for CliError {
    fn from(err: StatusError) -> Self {
        match err {
            StatusError::Rpc { .. } => Self::Rpc(err.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
