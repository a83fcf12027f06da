//! One-line-per-download summary output.

use std::fmt::Write as _;

use arigo_core::Status;
use humansize::{BINARY, format_size};

const NAME_WIDTH: usize = 48;

/// Human-readable byte count using binary units.
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Progress as a percentage, or `--` when the total is unknown.
pub fn format_percent(progress: Option<f64>) -> String {
    progress.map_or_else(|| "--".to_string(), |p| format!("{:.1}%", p * 100.0))
}

/// Truncates a string to at most `max_chars` characters, adding "..." if needed.
///
/// ```rust
/// use arigo_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Format one download as a single line.
pub fn summary_line(status: &Status) -> String {
    let total = if status.total_length == 0 {
        "?".to_string()
    } else {
        format_bytes(status.total_length)
    };

    let mut line = format!(
        "{gid:<16}  {state:<9}  {percent:>6}  {done} / {total}  down {down}/s  up {up}/s  {name}",
        gid = status.gid,
        state = status.status,
        percent = format_percent(status.progress()),
        done = format_bytes(status.completed_length),
        down = format_bytes(status.download_speed),
        up = format_bytes(status.upload_speed),
        name = truncate_string(status.name().unwrap_or("-"), NAME_WIDTH),
    );

    if status.has_error() {
        let _ = write!(line, "  [{}", status.error_code);
        if !status.error_message.is_empty() {
            let _ = write!(line, ": {}", status.error_message);
        }
        line.push(']');
    }

    line
}

/// Format a list of downloads, one per line.
pub fn render_summary(statuses: &[Status]) -> String {
    if statuses.is_empty() {
        return "No downloads.".to_string();
    }
    statuses
        .iter()
        .map(summary_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use arigo_core::{DownloadStatus, ExitStatus};

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(0.5)), "50.0%");
        assert_eq!(format_percent(None), "--");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate_string("ÄÖÜäöü", 5), "ÄÖ...");
    }

    #[test]
    fn test_summary_line_for_active_download() {
        let status = Status {
            gid: "2089b05ecca3d829".to_string(),
            status: DownloadStatus::Active,
            total_length: 2048,
            completed_length: 1024,
            ..Status::default()
        };
        let line = summary_line(&status);
        assert!(line.starts_with("2089b05ecca3d829  active"));
        assert!(line.contains("50.0%"));
        assert!(line.contains("1 KiB / 2 KiB"));
        assert!(!line.contains('['));
    }

    #[test]
    fn test_summary_line_shows_error() {
        let status = Status {
            gid: "e1".to_string(),
            status: DownloadStatus::Error,
            error_code: ExitStatus::ResourceNotFound,
            error_message: "404".to_string(),
            ..Status::default()
        };
        let line = summary_line(&status);
        assert!(line.contains("--"));
        assert!(line.contains("[3 (resource not found): 404]"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_summary(&[]), "No downloads.");
    }
}
