//! BitTorrent metadata attached to torrent downloads.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::time::UnixTime;
use super::wire::{self, AnnounceListWire, BitTorrentWire, InfoWire};
use crate::errors::{StatusError, StatusResult};

/// Information retrieved from the `.torrent` file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BitTorrentWire", into = "BitTorrentWire")]
pub struct BitTorrentStatus {
    /// Tracker tiers, each an ordered list of announce URIs.
    ///
    /// A torrent with a single `announce` and no `announce-list` shows up as
    /// one tier holding that URI.
    pub announce_list: Vec<Vec<String>>,
    pub comment: String,
    /// Creation time, when the torrent records one.
    pub creation_date: Option<UnixTime>,
    /// File mode. Unset until the metadata of a magnet download arrives.
    pub mode: Option<TorrentMode>,
    /// Values from the info dictionary.
    pub info: Option<BitTorrentInfo>,
}

/// Values taken from the torrent's info dictionary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitTorrentInfo {
    pub name: String,
}

impl BitTorrentStatus {
    /// The info dictionary name, if present and non-empty.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.info
            .as_ref()
            .map(|info| info.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// All announce URIs across tiers, in tier order.
    pub fn trackers(&self) -> impl Iterator<Item = &str> {
        self.announce_list.iter().flatten().map(String::as_str)
    }
}

impl TryFrom<BitTorrentWire> for BitTorrentStatus {
    type Error = StatusError;

    fn try_from(raw: BitTorrentWire) -> StatusResult<Self> {
        let creation_date = raw
            .creation_date
            .as_deref()
            .map(|date| UnixTime::parse_wire("bittorrent.creationDate", date))
            .transpose()?;

        Ok(Self {
            announce_list: raw
                .announce_list
                .map(AnnounceListWire::into_tiers)
                .unwrap_or_default(),
            comment: raw.comment.unwrap_or_default(),
            creation_date,
            mode: raw.mode.as_deref().map(TorrentMode::parse),
            info: raw.info.map(|info| BitTorrentInfo { name: info.name }),
        })
    }
}

impl From<BitTorrentStatus> for BitTorrentWire {
    fn from(bt: BitTorrentStatus) -> Self {
        Self {
            announce_list: Some(AnnounceListWire::from_tiers(&bt.announce_list)),
            comment: wire::encode_non_empty(&bt.comment),
            creation_date: bt.creation_date.map(UnixTime::to_wire),
            mode: bt.mode.map(|mode| mode.as_str().to_string()),
            info: bt.info.map(|info| InfoWire { name: info.name }),
        }
    }
}

/// File mode of a torrent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TorrentMode {
    /// The torrent describes one file.
    Single,
    /// The torrent describes a directory of files.
    Multi,
    /// A mode this client does not know, kept verbatim.
    Unknown(String),
}

impl TorrentMode {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::Unknown(raw) => raw,
        }
    }

    /// Parse from the wire, keeping unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        Self::parse_strict(s).unwrap_or_else(|_| {
            tracing::warn!(value = %s, "Unrecognized torrent mode, keeping raw value");
            Self::Unknown(s.to_string())
        })
    }

    /// Parse from the wire, rejecting unrecognized values.
    pub fn parse_strict(s: &str) -> StatusResult<Self> {
        match s {
            "single" => Ok(Self::Single),
            "multi" => Ok(Self::Multi),
            other => Err(StatusError::unknown_enum_value("bittorrent.mode", other)),
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl From<String> for TorrentMode {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<TorrentMode> for String {
    fn from(mode: TorrentMode) -> Self {
        match mode {
            TorrentMode::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for TorrentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
