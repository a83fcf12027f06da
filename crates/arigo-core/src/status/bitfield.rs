//! Piece map decoded from the hexadecimal `bitfield` value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{StatusError, StatusResult};

/// Which pieces of a download have been retrieved.
///
/// Bit 0 is the highest-order bit of the first byte and corresponds to piece
/// index 0. Padding bits after the last piece are zero. An empty map means the
/// download has not started; it is never the same as "all pieces present".
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitField {
    bytes: Vec<u8>,
}

impl BitField {
    /// Decode the wire hex string.
    pub fn from_hex(raw: &str) -> StatusResult<Self> {
        hex::decode(raw)
            .map(|bytes| Self { bytes })
            .map_err(|e| StatusError::type_mismatch("bitfield", format!("{e} in {raw:?}")))
    }

    /// Wrap raw bitmap bytes.
    #[must_use]
    pub const fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Lowercase hex, as aria2 emits it.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// True when no piece map exists yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the piece at `index` has been retrieved.
    #[must_use]
    pub fn has_piece(&self, index: usize) -> bool {
        self.bytes
            .get(index / 8)
            .is_some_and(|byte| byte & (0x80 >> (index % 8)) != 0)
    }

    /// Number of retrieved pieces.
    #[must_use]
    pub fn completed_pieces(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Whether all of the first `num_pieces` pieces are present.
    ///
    /// Always false for an empty map or zero pieces.
    #[must_use]
    pub fn is_complete(&self, num_pieces: usize) -> bool {
        num_pieces > 0 && (0..num_pieces).all(|i| self.has_piece(i))
    }

    /// Per-piece presence for the first `num_pieces` pieces.
    pub fn pieces(&self, num_pieces: usize) -> impl Iterator<Item = bool> + '_ {
        (0..num_pieces).map(|i| self.has_piece(i))
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for BitField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BitField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}
