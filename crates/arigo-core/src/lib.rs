//! Typed data model for the aria2 JSON-RPC interface.
//!
//! aria2 reports downloads as JSON objects whose integers and booleans are
//! transmitted as strings. This crate decodes those objects into records with
//! real `u64`/`bool` fields and encodes them back to the exact wire shape.
//!
//! ```
//! use arigo_core::{DownloadStatus, Status};
//!
//! let status = Status::from_json(
//!     r#"{"gid": "2089b05ecca3d829", "status": "active",
//!         "totalLength": "1000", "completedLength": "500"}"#,
//! )
//! .unwrap();
//! assert_eq!(status.status, DownloadStatus::Active);
//! assert_eq!(status.progress(), Some(0.5));
//! ```
//!
//! Enumeration values the client does not recognize are kept in an
//! `Unknown(String)` variant rather than rejected, so a newer aria2 never
//! breaks decoding. Use the `parse_strict` helpers to opt into rejection.
#![deny(unused_crate_dependencies)]

pub mod errors;
pub mod rpc;
pub mod status;

pub use errors::{StatusError, StatusResult};
pub use rpc::{RpcError, RpcResponse, decode_status, decode_status_list};
pub use status::{
    BitField, BitTorrentInfo, BitTorrentStatus, DownloadStatus, ExitStatus, File, Status,
    StatusWire, TorrentMode, UnixTime, Uri, UriStatus,
};

// Only used by the integration tests
#[cfg(test)]
use proptest as _;
