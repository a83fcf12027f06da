//! Download status records returned by aria2.
//!
//! Pure data types: decoding a status is a synchronous transformation from
//! the JSON wire shape to typed records, with no I/O.
//!
//! # Structure
//!
//! - `download` - The `Status` record and `DownloadStatus` lifecycle state
//! - `bittorrent` - Torrent metadata (`BitTorrentStatus`, `TorrentMode`)
//! - `file` - File descriptors and their source URIs
//! - `bitfield` - Decoded piece map
//! - `exit_status` - aria2 error codes
//! - `time` - `UnixTime`, a timestamp encoded as epoch seconds
//! - `wire` - Raw wire DTOs and the string-encoded scalar codecs

pub mod bitfield;
pub mod bittorrent;
pub mod download;
pub mod exit_status;
pub mod file;
pub mod time;
pub mod wire;

// Re-export commonly used types
pub use bitfield::BitField;
pub use bittorrent::{BitTorrentInfo, BitTorrentStatus, TorrentMode};
pub use download::{DownloadStatus, Status};
pub use exit_status::ExitStatus;
pub use file::{File, Uri, UriStatus};
pub use time::UnixTime;
pub use wire::StatusWire;
