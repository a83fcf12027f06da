//! End-to-end tests for reading payloads from disk.

use std::io::Write;

use arigo_cli::{Cli, OutputFormat, handlers};
use clap::Parser;
use tempfile::NamedTempFile;

fn write_payload(payload: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(payload.as_bytes()).unwrap();
    file
}

#[test]
fn test_inspect_torrent_response_from_file() {
    let file = write_payload(
        r#"{"jsonrpc": "2.0", "id": "x", "result": {
            "gid": "d2a1b5a5e5f6a7b8",
            "status": "active",
            "totalLength": "4096",
            "completedLength": "1024",
            "downloadSpeed": "512",
            "bittorrent": {"info": {"name": "debian.iso"}, "mode": "single"}
        }}"#,
    );
    let path = file.path().to_str().unwrap();

    let cli = Cli::parse_from(["arigo", path]);
    let out = handlers::inspect::execute(&cli).unwrap();
    assert!(out.contains("d2a1b5a5e5f6a7b8"));
    assert!(out.contains("25.0%"));
    assert!(out.contains("debian.iso"));
}

#[test]
fn test_json_output_from_file() {
    let file = write_payload(r#"{"gid": "a", "status": "removed", "errorCode": "31"}"#);
    let path = file.path().to_str().unwrap();

    let cli = Cli::parse_from(["arigo", "--output", "json", path]);
    assert_eq!(cli.output, OutputFormat::Json);
    let out = handlers::inspect::execute(&cli).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["status"], "removed");
    assert_eq!(value["errorCode"], "31");
}

#[test]
fn test_missing_file_is_no_input() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");

    let cli = Cli::parse_from(["arigo", missing.to_str().unwrap()]);
    let err = handlers::inspect::execute(&cli).unwrap_err();
    assert_eq!(err.exit_code(), 66);
}

#[test]
fn test_rpc_error_response() {
    let file = write_payload(
        r#"{"jsonrpc": "2.0", "id": "x", "error": {"code": 1, "message": "Unauthorized"}}"#,
    );
    let cli = Cli::parse_from(["arigo", file.path().to_str().unwrap()]);
    let err = handlers::inspect::execute(&cli).unwrap_err();
    assert_eq!(err.exit_code(), 69);
    assert!(err.to_string().contains("Unauthorized"));
}
