//! Decode a status payload and render it.

use arigo_core::{Status, StatusWire, decode_status_list};

use crate::error::CliError;
use crate::input::read_input;
use crate::parser::{Cli, OutputFormat};
use crate::presentation::render_summary;

/// Read, decode and render according to the parsed arguments.
pub fn execute(cli: &Cli) -> Result<String, CliError> {
    let payload = read_input(cli.input_path())?;
    render(&payload, cli.output)
}

/// Decode `payload` and render it in `format`.
pub fn render(payload: &str, format: OutputFormat) -> Result<String, CliError> {
    let statuses = decode_status_list(payload)?;
    tracing::debug!(count = statuses.len(), ?format, "Rendering statuses");

    match format {
        OutputFormat::Summary => Ok(render_summary(&statuses)),
        OutputFormat::Json => render_json(statuses),
    }
}

/// Pretty-printed wire JSON. A single download is printed as an object.
fn render_json(mut statuses: Vec<Status>) -> Result<String, CliError> {
    let rendered = if statuses.len() == 1 {
        let only = StatusWire::from(statuses.remove(0));
        serde_json::to_string_pretty(&only)
    } else {
        serde_json::to_string_pretty(&statuses)
    };
    rendered.map_err(|e| CliError::Output(e.to_string()))
}
