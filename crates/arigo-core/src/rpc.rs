//! JSON-RPC response envelope.
//!
//! aria2 answers `aria2.tellStatus` with a single status object and
//! `aria2.tellActive` / `tellWaiting` / `tellStopped` with an array of them,
//! both wrapped in a JSON-RPC 2.0 response. The helpers here accept either
//! the envelope or the bare payload, so a captured `result` can be decoded
//! the same way as a full response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{StatusError, StatusResult};
use crate::status::{Status, StatusWire};

/// A JSON-RPC 2.0 response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: String,
    /// Request id, echoed back by the server. String, number or null.
    #[serde(default)]
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// Error object of a failed JSON-RPC call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl<T> RpcResponse<T> {
    /// The result, or the server's error.
    pub fn into_result(self) -> StatusResult<T> {
        if let Some(err) = self.error {
            return Err(StatusError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        self.result
            .ok_or_else(|| StatusError::Json("response has neither result nor error".to_string()))
    }
}

fn is_envelope(value: &Value) -> bool {
    value.get("jsonrpc").is_some()
        || (value.get("gid").is_none()
            && (value.get("result").is_some() || value.get("error").is_some()))
}

/// Strip the envelope if there is one.
fn payload(value: Value) -> StatusResult<Value> {
    if !is_envelope(&value) {
        return Ok(value);
    }
    let response: RpcResponse<Value> = serde_json::from_value(value)?;
    tracing::trace!(id = %response.id, "Unwrapping JSON-RPC response");
    response.into_result()
}

/// Decode one status from a bare object or a `tellStatus` response.
pub fn decode_status(input: &str) -> StatusResult<Status> {
    let value = payload(serde_json::from_str(input)?)?;
    let raw: StatusWire = serde_json::from_value(value)?;
    let status = Status::try_from(raw)?;
    tracing::debug!(gid = %status.gid, status = %status.status, "Decoded download status");
    Ok(status)
}

/// Decode a list of statuses from a bare array, a `tell*` listing
/// response, or a single status (which yields a one-element list).
pub fn decode_status_list(input: &str) -> StatusResult<Vec<Status>> {
    let raw: Vec<StatusWire> = match payload(serde_json::from_str(input)?)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<_, _>>()?,
        single => vec![serde_json::from_value(single)?],
    };
    let statuses = raw
        .into_iter()
        .map(Status::try_from)
        .collect::<StatusResult<Vec<_>>>()?;
    tracing::debug!(count = statuses.len(), "Decoded download status list");
    Ok(statuses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::DownloadStatus;

    #[test]
    fn test_decode_bare_and_enveloped_status() {
        let bare = r#"{"gid": "2089b05ecca3d829", "status": "paused"}"#;
        let wrapped = r#"{"jsonrpc": "2.0", "id": "qwer", "result": {"gid": "2089b05ecca3d829", "status": "paused"}}"#;

        let a = decode_status(bare).unwrap();
        let b = decode_status(wrapped).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.status, DownloadStatus::Paused);
    }

    #[test]
    fn test_rpc_error_surfaces() {
        let input = r#"{"jsonrpc": "2.0", "id": 1, "error": {"code": 1, "message": "GID 0 is not found"}}"#;
        let err = decode_status(input).unwrap_err();
        assert_eq!(
            err,
            StatusError::Rpc {
                code: 1,
                message: "GID 0 is not found".to_string()
            }
        );
    }

    #[test]
    fn test_decode_list() {
        let input = r#"{"jsonrpc": "2.0", "id": 2, "result": [
            {"gid": "a", "status": "active"},
            {"gid": "b", "status": "waiting"}
        ]}"#;
        let list = decode_status_list(input).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].gid, "b");

        let single = decode_status_list(r#"{"gid": "c"}"#).unwrap();
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_list_error_reports_field() {
        let input = r#"[{"gid": "a", "totalLength": "10"}, {"gid": "b", "totalLength": "ten"}]"#;
        assert_eq!(
            decode_status_list(input).unwrap_err(),
            StatusError::malformed_numeric("totalLength", "ten")
        );
    }

    #[test]
    fn test_empty_envelope() {
        let err = decode_status(r#"{"jsonrpc": "2.0", "id": 3}"#).unwrap_err();
        assert!(matches!(err, StatusError::Json(_)));
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(decode_status("not json"), Err(StatusError::Json(_))));
    }
}
