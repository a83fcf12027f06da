//! Wire-format DTOs for aria2 status responses.
//!
//! aria2 transmits every integer and boolean as a JSON string, and omits keys
//! that do not apply to a download (or that a `tellStatus` key filter left
//! out). These types mirror that shape exactly: scalar values stay raw strings
//! and optional keys stay `Option`. Conversion to and from the typed records
//! lives next to each record; this module only holds the shapes and the
//! scalar codecs they share.

use serde::{Deserialize, Serialize};

use crate::errors::{StatusError, StatusResult};

/// Raw `tellStatus` result object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusWire {
    #[serde(default)]
    pub gid: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bitfield: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_seeders: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pieces: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followed_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub belongs_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileWire>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bittorrent: Option<BitTorrentWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_integrity_pending: Option<String>,
}

/// Raw entry of the `files` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
    #[serde(default)]
    pub uris: Vec<UriWire>,
}

/// Raw entry of a file's `uris` array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriWire {
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub status: String,
}

/// Raw `bittorrent` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BitTorrentWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announce_list: Option<AnnounceListWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Integer timestamp wrapped in a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<InfoWire>,
}

/// Raw `bittorrent.info` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoWire {
    #[serde(default)]
    pub name: String,
}

/// `announceList` as found on the wire.
///
/// Tiered lists are the normal form. A flat announce URI, either in place of
/// the whole list or in place of one tier, is accepted and later normalized
/// into a single-element tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnounceListWire {
    Tiers(Vec<AnnounceTierWire>),
    Flat(String),
}

/// One tier of `announceList`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnounceTierWire {
    Uris(Vec<String>),
    Flat(String),
}

impl AnnounceListWire {
    /// Normalize into tiers of URIs.
    pub fn into_tiers(self) -> Vec<Vec<String>> {
        match self {
            Self::Flat(uri) => vec![vec![uri]],
            Self::Tiers(tiers) => tiers
                .into_iter()
                .map(|tier| match tier {
                    AnnounceTierWire::Uris(uris) => uris,
                    AnnounceTierWire::Flat(uri) => vec![uri],
                })
                .collect(),
        }
    }

    /// Wrap normalized tiers for encoding.
    pub fn from_tiers(tiers: &[Vec<String>]) -> Self {
        Self::Tiers(tiers.iter().cloned().map(AnnounceTierWire::Uris).collect())
    }
}

/// Decode a string-encoded unsigned integer. Absent keys decode to zero.
pub(crate) fn decode_u64(field: &'static str, raw: Option<&str>) -> StatusResult<u64> {
    let Some(raw) = raw else {
        return Ok(0);
    };
    // u64::from_str tolerates a leading '+', the wire format does not
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StatusError::malformed_numeric(field, raw));
    }
    raw.parse()
        .map_err(|_| StatusError::malformed_numeric(field, raw))
}

/// Decode a string-encoded boolean. Absent keys decode to `false`.
pub(crate) fn decode_bool(field: &'static str, raw: Option<&str>) -> StatusResult<bool> {
    match raw {
        None | Some("false") => Ok(false),
        Some("true") => Ok(true),
        Some(other) => Err(StatusError::type_mismatch(
            field,
            format!("expected \"true\" or \"false\", got {other:?}"),
        )),
    }
}

pub(crate) fn encode_u64(value: u64) -> Option<String> {
    Some(value.to_string())
}

pub(crate) fn encode_bool(value: bool) -> Option<String> {
    Some(if value { "true" } else { "false" }.to_string())
}

/// Encode a string that aria2 omits when empty.
pub(crate) fn encode_non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_u64_bounds() {
        assert_eq!(decode_u64("totalLength", Some("0")).unwrap(), 0);
        assert_eq!(
            decode_u64("totalLength", Some("18446744073709551615")).unwrap(),
            u64::MAX
        );
        assert_eq!(decode_u64("totalLength", None).unwrap(), 0);
    }

    #[test]
    fn test_decode_u64_rejects_non_digits() {
        for raw in ["abc", "", "-1", "+5", "1.0", " 7", "18446744073709551616"] {
            let err = decode_u64("uploadSpeed", Some(raw)).unwrap_err();
            assert_eq!(err, StatusError::malformed_numeric("uploadSpeed", raw));
        }
    }

    #[test]
    fn test_decode_bool() {
        assert!(decode_bool("seeder", Some("true")).unwrap());
        assert!(!decode_bool("seeder", Some("false")).unwrap());
        assert!(!decode_bool("seeder", None).unwrap());
        assert!(matches!(
            decode_bool("seeder", Some("TRUE")),
            Err(StatusError::TypeMismatch { field: "seeder", .. })
        ));
    }

    #[test]
    fn test_status_wire_uses_aria2_key_names() {
        let wire = StatusWire {
            gid: "2089b05ecca3d829".to_string(),
            bitfield: Some("ff".to_string()),
            info_hash: Some("abc".to_string()),
            followed_by: Some(vec![]),
            verify_integrity_pending: Some("true".to_string()),
            ..StatusWire::default()
        };
        let json = serde_json::to_value(&wire).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["gid", "status", "bitfield", "infoHash", "followedBy", "verifyIntegrityPending"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert!(!obj.contains_key("totalLength"));
    }

    #[test]
    fn test_announce_list_shapes() {
        let tiered: AnnounceListWire =
            serde_json::from_str(r#"[["udp://a"],["udp://b","udp://c"]]"#).unwrap();
        assert_eq!(
            tiered.into_tiers(),
            vec![vec!["udp://a".to_string()], vec!["udp://b".to_string(), "udp://c".to_string()]]
        );

        let flat_tier: AnnounceListWire = serde_json::from_str(r#"["udp://a"]"#).unwrap();
        assert_eq!(flat_tier.into_tiers(), vec![vec!["udp://a".to_string()]]);

        let flat: AnnounceListWire = serde_json::from_str(r#""udp://a""#).unwrap();
        assert_eq!(flat.into_tiers(), vec![vec!["udp://a".to_string()]]);
    }
}
