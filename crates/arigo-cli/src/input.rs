//! Reading the status payload from a file or stdin.

use std::io::{self, Read};
use std::path::Path;

use crate::error::CliError;

/// Read the whole payload. `None` reads stdin.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    let Some(path) = path else {
        tracing::debug!("Reading status payload from stdin");
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    };

    tracing::debug!(path = %path.display(), "Reading status payload");
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CliError::NoInput(path.display().to_string()),
        _ => CliError::Io(format!("{}: {e}", path.display())),
    })
}
