//! The download status record and its lifecycle state.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::bitfield::BitField;
use super::bittorrent::BitTorrentStatus;
use super::exit_status::ExitStatus;
use super::file::File;
use super::wire::{self, BitTorrentWire, FileWire, StatusWire};
use crate::errors::{StatusError, StatusResult};

/// Lifecycle state of a download as reported by aria2.
///
/// The server is the only authority over this value; the client never
/// transitions it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DownloadStatus {
    /// Currently downloading or seeding.
    Active,
    /// In the queue; not started.
    Waiting,
    Paused,
    /// Stopped because of an error.
    Error,
    /// Stopped and completed.
    Completed,
    /// Removed by the user.
    Removed,
    /// A state this client does not know, kept verbatim.
    ///
    /// A response filtered by `tellStatus` keys that leaves out `status`
    /// decodes to `Unknown("")`.
    Unknown(String),
}

impl DownloadStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Waiting => "waiting",
            Self::Paused => "paused",
            Self::Error => "error",
            Self::Completed => "completed",
            Self::Removed => "removed",
            Self::Unknown(raw) => raw,
        }
    }

    /// Parse from the wire, keeping unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::parse_strict(s).unwrap_or_else(|_| {
            if !s.is_empty() {
                tracing::warn!(value = %s, "Unrecognized download status, keeping raw value");
            }
            Self::Unknown(s.to_string())
        })
    }

    /// Parse from the wire, rejecting unrecognized values.
    pub fn parse_strict(s: &str) -> StatusResult<Self> {
        match s {
            "active" => Ok(Self::Active),
            "waiting" => Ok(Self::Waiting),
            "paused" => Ok(Self::Paused),
            "error" => Ok(Self::Error),
            "completed" => Ok(Self::Completed),
            "removed" => Ok(Self::Removed),
            other => Err(StatusError::unknown_enum_value("status", other)),
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Whether aria2 has stopped working on the download for good.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Error | Self::Completed | Self::Removed)
    }
}

impl Default for DownloadStatus {
    /// What a response without a `status` key decodes to.
    fn default() -> Self {
        Self::Unknown(String::new())
    }
}

impl From<String> for DownloadStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<DownloadStatus> for String {
    fn from(status: DownloadStatus) -> Self {
        match status {
            DownloadStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DownloadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Snapshot of one download, as returned by `tellStatus` and the `tell*`
/// listing methods.
///
/// Keys missing from the response decode to their zero value. Relationships
/// to other downloads (`followed_by`, `following`, `belongs_to`) are GIDs to
/// look up, never resolved references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StatusWire", into = "StatusWire")]
pub struct Status {
    /// GID of the download.
    pub gid: String,
    pub status: DownloadStatus,
    /// Total length in bytes. Zero while unknown.
    pub total_length: u64,
    pub completed_length: u64,
    pub upload_length: u64,
    /// Retrieved pieces. Empty until the download starts.
    pub bitfield: BitField,
    /// Bytes per second.
    pub download_speed: u64,
    /// Bytes per second.
    pub upload_speed: u64,
    /// BitTorrent only.
    pub info_hash: String,
    /// Number of seeders connected to. BitTorrent only.
    pub num_seeders: u64,
    /// True if the local endpoint is a seeder. BitTorrent only.
    pub seeder: bool,
    pub piece_length: u64,
    pub num_pieces: u64,
    /// Number of peers or servers connected to.
    pub connections: u64,
    /// Code of the last error, if any.
    pub error_code: ExitStatus,
    pub error_message: String,
    /// Downloads generated as a result of this one, such as the entries of a
    /// downloaded Metalink or `.torrent` file.
    pub followed_by: Vec<String>,
    /// Reverse link for `followed_by`.
    pub following: String,
    /// GID of the parent download, if this one is part of another.
    pub belongs_to: String,
    /// Directory to save files in.
    pub dir: String,
    pub files: Vec<File>,
    /// Present only for BitTorrent downloads.
    pub bittorrent: Option<BitTorrentStatus>,
    /// Bytes verified so far while the files are hash checked.
    pub verified_length: u64,
    /// True while the download waits in the hash check queue.
    pub verify_integrity_pending: bool,
}

impl Status {
    /// Decode a single status object from JSON.
    pub fn from_json(input: &str) -> StatusResult<Self> {
        let raw: StatusWire = serde_json::from_str(input)?;
        Self::try_from(raw)
    }

    /// Encode back to the aria2 wire shape.
    pub fn to_json(&self) -> StatusResult<String> {
        Ok(serde_json::to_string(&StatusWire::from(self.clone()))?)
    }

    /// Whether the download uses the BitTorrent protocol.
    #[must_use]
    pub const fn is_bittorrent(&self) -> bool {
        self.bittorrent.is_some()
    }

    /// Completed fraction in `[0.0, 1.0]`, or `None` while the total is unknown.
    ///
    /// Values above 1.0 are clamped; see [`Status::exceeds_total`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> Option<f64> {
        (self.total_length > 0)
            .then(|| (self.completed_length as f64 / self.total_length as f64).min(1.0))
    }

    /// True when the server reported more completed bytes than the total.
    #[must_use]
    pub const fn exceeds_total(&self) -> bool {
        self.total_length > 0 && self.completed_length > self.total_length
    }

    /// True when the download carries an error code or message.
    #[must_use]
    pub fn has_error(&self) -> bool {
        !self.error_code.is_success() || !self.error_message.is_empty()
    }

    /// Display name: the torrent name, else the first file's name, else the
    /// first URI of the first file.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        if let Some(name) = self.bittorrent.as_ref().and_then(BitTorrentStatus::name) {
            return Some(name);
        }
        let first = self.files.first()?;
        first
            .file_name()
            .or_else(|| first.uris.first().map(|u| u.uri.as_str()))
    }

    /// Whether a hash check is queued or running.
    #[must_use]
    pub const fn is_verifying(&self) -> bool {
        self.verify_integrity_pending || self.verified_length > 0
    }
}

impl TryFrom<StatusWire> for Status {
    type Error = StatusError;

    fn try_from(raw: StatusWire) -> StatusResult<Self> {
        let error_code = wire::decode_u64("errorCode", raw.error_code.as_deref())?;
        let error_code = u32::try_from(error_code)
            .map(ExitStatus::from_code)
            .map_err(|_| {
                StatusError::malformed_numeric("errorCode", raw.error_code.clone().unwrap_or_default())
            })?;

        let bitfield = match raw.bitfield.as_deref() {
            Some(hex) => BitField::from_hex(hex)?,
            None => BitField::default(),
        };

        let files = raw
            .files
            .unwrap_or_default()
            .into_iter()
            .map(File::try_from)
            .collect::<StatusResult<Vec<_>>>()?;

        let bittorrent = raw.bittorrent.map(BitTorrentStatus::try_from).transpose()?;

        let status = Self {
            status: DownloadStatus::parse(&raw.status),
            total_length: wire::decode_u64("totalLength", raw.total_length.as_deref())?,
            completed_length: wire::decode_u64("completedLength", raw.completed_length.as_deref())?,
            upload_length: wire::decode_u64("uploadLength", raw.upload_length.as_deref())?,
            bitfield,
            download_speed: wire::decode_u64("downloadSpeed", raw.download_speed.as_deref())?,
            upload_speed: wire::decode_u64("uploadSpeed", raw.upload_speed.as_deref())?,
            info_hash: raw.info_hash.unwrap_or_default(),
            num_seeders: wire::decode_u64("numSeeders", raw.num_seeders.as_deref())?,
            seeder: wire::decode_bool("seeder", raw.seeder.as_deref())?,
            piece_length: wire::decode_u64("pieceLength", raw.piece_length.as_deref())?,
            num_pieces: wire::decode_u64("numPieces", raw.num_pieces.as_deref())?,
            connections: wire::decode_u64("connections", raw.connections.as_deref())?,
            error_code,
            error_message: raw.error_message.unwrap_or_default(),
            followed_by: raw.followed_by.unwrap_or_default(),
            following: raw.following.unwrap_or_default(),
            belongs_to: raw.belongs_to.unwrap_or_default(),
            dir: raw.dir.unwrap_or_default(),
            files,
            bittorrent,
            verified_length: wire::decode_u64("verifiedLength", raw.verified_length.as_deref())?,
            verify_integrity_pending: wire::decode_bool(
                "verifyIntegrityPending",
                raw.verify_integrity_pending.as_deref(),
            )?,
            gid: raw.gid,
        };

        if status.exceeds_total() {
            tracing::debug!(
                gid = %status.gid,
                completed = status.completed_length,
                total = status.total_length,
                "Completed length exceeds total length"
            );
        }

        Ok(status)
    }
}

impl From<Status> for StatusWire {
    fn from(status: Status) -> Self {
        Self {
            gid: status.gid,
            status: status.status.into(),
            total_length: wire::encode_u64(status.total_length),
            completed_length: wire::encode_u64(status.completed_length),
            upload_length: wire::encode_u64(status.upload_length),
            bitfield: Some(status.bitfield.to_hex()),
            download_speed: wire::encode_u64(status.download_speed),
            upload_speed: wire::encode_u64(status.upload_speed),
            info_hash: wire::encode_non_empty(&status.info_hash),
            num_seeders: wire::encode_u64(status.num_seeders),
            seeder: wire::encode_bool(status.seeder),
            piece_length: wire::encode_u64(status.piece_length),
            num_pieces: wire::encode_u64(status.num_pieces),
            connections: wire::encode_u64(status.connections),
            error_code: wire::encode_u64(u64::from(status.error_code.code())),
            error_message: wire::encode_non_empty(&status.error_message),
            followed_by: Some(status.followed_by),
            following: wire::encode_non_empty(&status.following),
            belongs_to: wire::encode_non_empty(&status.belongs_to),
            dir: Some(status.dir),
            files: Some(status.files.into_iter().map(FileWire::from).collect()),
            bittorrent: status.bittorrent.map(BitTorrentWire::from),
            // aria2 only sends these during a hash check
            verified_length: (status.verified_length > 0)
                .then(|| status.verified_length.to_string()),
            verify_integrity_pending: status
                .verify_integrity_pending
                .then(|| "true".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_status_parse() {
        assert_eq!(DownloadStatus::parse("active"), DownloadStatus::Active);
        assert_eq!(DownloadStatus::parse("removed"), DownloadStatus::Removed);
        assert_eq!(
            DownloadStatus::parse("Active"),
            DownloadStatus::Unknown("Active".to_string())
        );
        assert_eq!(
            DownloadStatus::parse_strict("bogus").unwrap_err(),
            StatusError::unknown_enum_value("status", "bogus")
        );
    }

    #[test]
    fn test_download_status_serde_keeps_unknown() {
        let status: DownloadStatus = serde_json::from_str("\"seeding\"").unwrap();
        assert!(status.is_unknown());
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"seeding\"");
    }

    #[test]
    fn test_is_finished() {
        assert!(DownloadStatus::Completed.is_finished());
        assert!(DownloadStatus::Error.is_finished());
        assert!(!DownloadStatus::Paused.is_finished());
    }

    #[test]
    fn test_error_code_out_of_u32_range() {
        let raw = StatusWire {
            error_code: Some("4294967296".to_string()),
            ..StatusWire::default()
        };
        assert_eq!(
            Status::try_from(raw).unwrap_err(),
            StatusError::malformed_numeric("errorCode", "4294967296")
        );
    }

    #[test]
    fn test_progress_and_total_invariant() {
        let mut status = Status {
            total_length: 1000,
            completed_length: 250,
            ..Status::default()
        };
        assert_eq!(status.progress(), Some(0.25));
        assert!(!status.exceeds_total());

        status.completed_length = 1200;
        assert!(status.exceeds_total());
        assert_eq!(status.progress(), Some(1.0));

        status.total_length = 0;
        assert_eq!(status.progress(), None);
        assert!(!status.exceeds_total());
    }

    #[test]
    fn test_name_falls_back_to_first_file() {
        let status = Status::from_json(
            r#"{"gid": "a", "files": [{"path": "/tmp/dl/file.bin", "uris": []}]}"#,
        )
        .unwrap();
        assert_eq!(status.name(), Some("file.bin"));

        let unnamed = Status::from_json(
            r#"{"gid": "b", "files": [{"path": "", "uris": [{"uri": "http://h/x", "status": "used"}]}]}"#,
        )
        .unwrap();
        assert_eq!(unnamed.name(), Some("http://h/x"));
    }

    #[test]
    fn test_hash_check_keys_only_encoded_when_set() {
        let idle = StatusWire::from(Status::default());
        assert!(idle.verified_length.is_none());
        assert!(idle.verify_integrity_pending.is_none());

        let checking = StatusWire::from(Status {
            verify_integrity_pending: true,
            ..Status::default()
        });
        assert_eq!(checking.verify_integrity_pending.as_deref(), Some("true"));
    }
}
