//! File descriptors listed in a download's `files` array.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::wire::{self, FileWire, UriWire};
use crate::errors::StatusResult;

/// One file belonging to a download.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FileWire", into = "FileWire")]
pub struct File {
    /// 1-based index of the file, in the order the download lists them.
    pub index: u64,
    /// Local path. Empty until aria2 knows where the file goes.
    pub path: String,
    /// File size in bytes.
    pub length: u64,
    /// Completed bytes of this file.
    pub completed_length: u64,
    /// Whether the file is selected by `--select-file`.
    pub selected: bool,
    /// URIs this file is fetched from.
    pub uris: Vec<Uri>,
}

impl File {
    /// Completed fraction in `[0.0, 1.0]`, or `None` while the length is unknown.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> Option<f64> {
        (self.length > 0).then(|| self.completed_length as f64 / self.length as f64)
    }

    /// The last path component, if the path is known.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        Path::new(&self.path).file_name().and_then(|name| name.to_str())
    }

    /// URIs currently in use.
    pub fn used_uris(&self) -> impl Iterator<Item = &Uri> {
        self.uris.iter().filter(|u| u.status == UriStatus::Used)
    }
}

impl TryFrom<FileWire> for File {
    type Error = crate::errors::StatusError;

    fn try_from(raw: FileWire) -> StatusResult<Self> {
        Ok(Self {
            index: wire::decode_u64("files.index", raw.index.as_deref())?,
            length: wire::decode_u64("files.length", raw.length.as_deref())?,
            completed_length: wire::decode_u64(
                "files.completedLength",
                raw.completed_length.as_deref(),
            )?,
            selected: wire::decode_bool("files.selected", raw.selected.as_deref())?,
            path: raw.path,
            uris: raw.uris.into_iter().map(Uri::from).collect(),
        })
    }
}

impl From<File> for FileWire {
    fn from(file: File) -> Self {
        Self {
            index: wire::encode_u64(file.index),
            path: file.path,
            length: wire::encode_u64(file.length),
            completed_length: wire::encode_u64(file.completed_length),
            selected: wire::encode_bool(file.selected),
            uris: file.uris.into_iter().map(UriWire::from).collect(),
        }
    }
}

/// A source URI of a file.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "UriWire", into = "UriWire")]
pub struct Uri {
    pub uri: String,
    pub status: UriStatus,
}

impl From<UriWire> for Uri {
    fn from(raw: UriWire) -> Self {
        Self {
            uri: raw.uri,
            status: UriStatus::parse(&raw.status),
        }
    }
}

impl From<Uri> for UriWire {
    fn from(uri: Uri) -> Self {
        Self {
            uri: uri.uri,
            status: uri.status.as_str().to_string(),
        }
    }
}

/// Whether a URI is being used or is queued.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UriStatus {
    Used,
    Waiting,
    /// A value this client does not know, kept verbatim.
    Unknown(String),
}

impl UriStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Used => "used",
            Self::Waiting => "waiting",
            Self::Unknown(raw) => raw,
        }
    }

    /// Parse from the wire, keeping unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "used" => Self::Used,
            "waiting" => Self::Waiting,
            other => {
                tracing::warn!(value = %other, "Unrecognized URI status, keeping raw value");
                Self::Unknown(other.to_string())
            }
        }
    }
}

impl fmt::Display for UriStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StatusError;

    const FILE_JSON: &str = r#"{
        "index": "1",
        "path": "/downloads/ubuntu.iso",
        "length": "4000",
        "completedLength": "1000",
        "selected": "true",
        "uris": [
            {"uri": "http://mirror-a/ubuntu.iso", "status": "used"},
            {"uri": "http://mirror-b/ubuntu.iso", "status": "waiting"}
        ]
    }"#;

    #[test]
    fn test_decode_file() {
        let file: File = serde_json::from_str(FILE_JSON).unwrap();
        assert_eq!(file.index, 1);
        assert_eq!(file.length, 4000);
        assert!(file.selected);
        assert_eq!(file.file_name(), Some("ubuntu.iso"));
        assert_eq!(file.progress(), Some(0.25));
        assert_eq!(file.used_uris().count(), 1);
    }

    #[test]
    fn test_file_reencodes_wire_strings() {
        let file: File = serde_json::from_str(FILE_JSON).unwrap();
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["length"], "4000");
        assert_eq!(json["selected"], "true");
        assert_eq!(json["uris"][1]["status"], "waiting");
    }

    #[test]
    fn test_malformed_length_names_nested_field() {
        let raw = FileWire {
            length: Some("lots".to_string()),
            ..FileWire::default()
        };
        assert_eq!(
            File::try_from(raw).unwrap_err(),
            StatusError::malformed_numeric("files.length", "lots")
        );
    }

    #[test]
    fn test_unknown_uri_status_is_preserved() {
        let uri = Uri::from(UriWire {
            uri: "http://x".to_string(),
            status: "retrying".to_string(),
        });
        assert_eq!(uri.status, UriStatus::Unknown("retrying".to_string()));
        assert_eq!(UriWire::from(uri).status, "retrying");
    }

    #[test]
    fn test_progress_unknown_length() {
        assert_eq!(File::default().progress(), None);
    }
}
