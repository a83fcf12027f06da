//! Timestamp that travels as a Unix epoch second count.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{StatusError, StatusResult};

/// A UTC instant that serializes as signed seconds since the Unix epoch.
///
/// Sub-second precision is never represented: constructing a `UnixTime`
/// truncates to the second boundary at or before the instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnixTime(DateTime<Utc>);

impl UnixTime {
    /// Create from seconds since the epoch. Returns `None` if out of range.
    #[must_use]
    pub fn from_timestamp(secs: i64) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(Self)
    }

    /// Create from a `DateTime`, dropping any sub-second component.
    #[must_use]
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        // timestamp() floors, so this can never leave chrono's range
        Self(DateTime::from_timestamp(instant.timestamp(), 0).unwrap_or(instant))
    }

    /// Seconds since the epoch.
    #[must_use]
    pub fn timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// The wrapped instant.
    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parse the string-wrapped form used by `bittorrent.creationDate`.
    pub(crate) fn parse_wire(field: &'static str, raw: &str) -> StatusResult<Self> {
        let secs: i64 = raw.parse().map_err(|_| {
            StatusError::type_mismatch(field, format!("expected an integer timestamp, got {raw:?}"))
        })?;
        Self::from_timestamp(secs).ok_or_else(|| {
            StatusError::type_mismatch(field, format!("timestamp {secs} is out of range"))
        })
    }

    /// Render the string-wrapped form used by `bittorrent.creationDate`.
    pub(crate) fn to_wire(self) -> String {
        self.timestamp().to_string()
    }
}

impl From<DateTime<Utc>> for UnixTime {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::from_datetime(instant)
    }
}

impl From<UnixTime> for DateTime<Utc> {
    fn from(time: UnixTime) -> Self {
        time.0
    }
}

impl fmt::Display for UnixTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for UnixTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.timestamp())
    }
}

impl<'de> Deserialize<'de> for UnixTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let secs = i64::deserialize(deserializer)?;
        Self::from_timestamp(secs).ok_or_else(|| {
            serde::de::Error::custom(format!("timestamp {secs} is out of range"))
        })
    }
}
