//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: decoding belongs in `arigo-core`.

pub mod summary;

pub use summary::{format_bytes, format_percent, render_summary, summary_line, truncate_string};
