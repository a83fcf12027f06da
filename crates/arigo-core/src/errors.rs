//! Decode error types.
//!
//! Every error that carries a `field` uses the aria2 wire name of that field
//! (for nested values, a dotted path such as `files.length`), so a schema
//! mismatch can be diagnosed from the message alone.

use thiserror::Error;

/// Error type for decoding status payloads.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StatusError {
    /// A string-encoded integer did not contain a decimal number.
    #[error("Malformed numeric field `{field}`: {value:?}")]
    MalformedNumeric {
        /// Wire name of the offending field.
        field: &'static str,
        /// The raw string as received.
        value: String,
    },

    /// A field held a value of the wrong shape.
    #[error("Type mismatch in `{field}`: {message}")]
    TypeMismatch {
        /// Wire name of the offending field.
        field: &'static str,
        /// What was expected and what was found.
        message: String,
    },

    /// An enumeration string outside the known variant set.
    ///
    /// Only produced by the strict parse helpers; regular decoding keeps the
    /// raw value in an `Unknown` variant instead.
    #[error("Unknown value for `{field}`: {value:?}")]
    UnknownEnumValue {
        /// Wire name of the offending field.
        field: &'static str,
        /// The unrecognized value.
        value: String,
    },

    /// The payload was not valid JSON or did not have the expected structure.
    #[error("Invalid JSON payload: {0}")]
    Json(String),

    /// The server answered with a JSON-RPC error object.
    #[error("RPC error {code}: {message}")]
    Rpc {
        /// JSON-RPC error code.
        code: i64,
        /// Server-provided message.
        message: String,
    },
}

impl StatusError {
    /// Create a malformed numeric field error.
    pub fn malformed_numeric(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedNumeric {
            field,
            value: value.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(field: &'static str, message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field,
            message: message.into(),
        }
    }

    /// Create an unknown enumeration value error.
    pub fn unknown_enum_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            field,
            value: value.into(),
        }
    }

    /// Wire name of the field that failed, if the error is tied to one.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::MalformedNumeric { field, .. }
            | Self::TypeMismatch { field, .. }
            | Self::UnknownEnumValue { field, .. } => Some(field),
            Self::Json(_) | Self::Rpc { .. } => None,
        }
    }

    /// Check if this error came from the payload itself rather than the server.
    #[must_use]
    pub const fn is_decode_error(&self) -> bool {
        !matches!(self, Self::Rpc { .. })
    }
}

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Convenience result type for decode operations.
pub type StatusResult<T> = Result<T, StatusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_field_and_value() {
        let err = StatusError::malformed_numeric("totalLength", "abc");
        let msg = err.to_string();
        assert!(msg.contains("totalLength"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(
            StatusError::type_mismatch("bitfield", "odd length").field(),
            Some("bitfield")
        );
        assert_eq!(StatusError::Json("eof".to_string()).field(), None);
    }

    #[test]
    fn test_is_decode_error() {
        assert!(StatusError::unknown_enum_value("status", "bogus").is_decode_error());
        assert!(
            !StatusError::Rpc {
                code: 1,
                message: "GID not found".to_string()
            }
            .is_decode_error()
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<u64>("{").unwrap_err();
        assert!(matches!(StatusError::from(err), StatusError::Json(_)));
    }
}
